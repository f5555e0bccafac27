use gridrace_kinematics::*;

fn main() {
    let start = Pose::new(0, 0);
    let target = Pose::new(12, 5);
    let previous = start;
    let num_ticks = 12;

    let mut racer = Racer::new(start);

    println!("Initializing chase...");
    println!("  Start:    {}", start);
    println!("  Target:   {}", target);
    println!("  Previous: {}", previous);
    println!("  Ticks:    {}", num_ticks);
    println!("\nChasing...");

    for tick in 0..num_ticks {
        racer.velocity = VelocityController::step(&racer, target, previous);
        racer.advance();
        println!("Tick {:>2}: {}", tick + 1, racer);
    }

    println!("\nChase complete.");
    println!("Final state: {}", racer);
    println!(
        "Distance to target: {:.2} cells",
        racer.pose.distance_to(target)
    );
}
