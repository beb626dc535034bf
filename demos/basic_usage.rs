use motion_error_codes::{
    describe, severity_of, ErrorCode, Report, ReportStyle, LIB_NAME, LIB_VERSION,
};

/// Numbers as they might arrive from the controller's serial port.
const RECEIVED: [u16; 6] = [0, 800, 101, 301, 600, 900];

fn main() {
    println!("--- {} v{} ---\n", LIB_NAME, LIB_VERSION);

    // 1. Raw lookups: what a minimal consumer needs.
    println!("1. [LOOKUP] severity + description");
    for raw in RECEIVED {
        println!("   {:>4}  {:<8} {}", raw, severity_of(raw), describe(raw));
    }

    // 2. Typed access when the number is known to be catalogued.
    println!("\n2. [TYPED] identifier and category");
    let code = ErrorCode::MotorOvercurrent;
    println!("   {} ({}) -> {:?}", code, code.category(), code.severity());

    // 3. Report lines with context, as written to the host log.
    println!("\n3. [REPORT] log lines");
    let report = Report::from_code(ErrorCode::MotorEndstopTriggered)
        .with_context("axis", "1")
        .with_context("position", "1520");
    println!("   {}", report);

    let mut line = String::new();
    if Report::new(9999).write_to(&mut line, ReportStyle::PLAIN).is_ok() {
        println!("   {}", line);
    }

    // 4. Parsing identifiers typed by an operator.
    println!("\n4. [PARSE] operator input");
    for input in ["E-SAF-900", "309", "E-SYS-301"] {
        match input.parse::<ErrorCode>() {
            Ok(code) => println!("   {:<10} -> {}", input, code.description()),
            Err(err) => println!("   {:<10} -> rejected: {}", input, err),
        }
    }
}
