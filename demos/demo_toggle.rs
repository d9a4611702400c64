use argbind::{CommandLineParser, Parameter, Switch};

fn main() {
    // Each occurrence of a switch flips the current value, starting from the initial value here.
    let mut light: bool = false;
    let mut fan: bool = true;

    let mut parser = CommandLineParser::new("toggle")
        .add(Parameter::option(Switch::new(&mut light), "light").help("Flip the light."))
        .add(Parameter::option(Switch::new(&mut fan), "fan").help("Flip the fan."))
        .build();

    parser.parse();
    // The usage annotations show the values after parsing.
    parser.print_usage();
    drop(parser);

    println!("light: {}", if light { "on" } else { "off" });
    println!("fan: {}", if fan { "on" } else { "off" });
}
