use gridrace_track::{GridPoint, ObjectiveArea, ObjectiveSelector, TrackGrid};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Build an 8x8 track with a few bonus and malus cells
    let mut grid = TrackGrid::new(8)?;
    grid.set_value(GridPoint::new(1, 6), 3);
    grid.set_value(GridPoint::new(3, 3), -5);
    grid.set_value(GridPoint::new(5, 2), 7);
    grid.set_value(GridPoint::new(6, 6), 7);

    println!("{}", grid);

    // An area fully on the grid
    let area = ObjectiveArea::new(4, 0, 3, 4);
    match ObjectiveSelector::choose_point(&grid, &area) {
        Some(point) => println!("Area (4, 0, 3, 4) selects {}", point),
        None => println!("Area (4, 0, 3, 4) holds no cell of the grid"),
    }

    // An area hanging over the edge: the off-grid part is ignored
    let area = ObjectiveArea::new(5, 5, 6, 6);
    match ObjectiveSelector::choose_point(&grid, &area) {
        Some(point) => println!("Area (5, 5, 6, 6) selects {}", point),
        None => println!("Area (5, 5, 6, 6) holds no cell of the grid"),
    }

    // An area entirely off the grid yields no point at all
    let area = ObjectiveArea::new(20, 20, 2, 2);
    match ObjectiveSelector::choose_point(&grid, &area) {
        Some(point) => println!("Area (20, 20, 2, 2) selects {}", point),
        None => println!("Area (20, 20, 2, 2) holds no cell of the grid"),
    }

    Ok(())
}
