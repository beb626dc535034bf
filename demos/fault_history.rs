use motion_error_codes::{ring_buffer::RingBufferLogger, ReportStyle, Severity};
use std::thread;

fn main() {
    println!("--- Fault History Example ---\n");

    // Keep the last 8 reports, 64 bytes of detail each.
    let history = RingBufferLogger::new(8, 64);

    // Serial reader thread: the controller acknowledges commands, then trips.
    let reader = {
        let history = history.clone();
        thread::spawn(move || {
            for raw in [710, 707, 312, 307, 700, 708] {
                history.log(raw, "");
            }
            history.log(315, "axis=1 position=1520");
            history.log(900, "source=estop_button");
        })
    };

    if reader.join().is_err() {
        eprintln!("serial reader panicked");
        return;
    }

    println!("Worst severity: {:?}", history.worst());
    println!(
        "Faults (ERROR or worse): {}",
        history.count_at_least(Severity::Error)
    );
    println!("Evicted: {}\n", history.eviction_count());

    for line in history.render_lines(ReportStyle::default()) {
        println!("  {}", line);
    }
}
