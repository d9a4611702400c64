use argbind::{CommandLineParser, Parameter, Scalar, Switch};

fn main() {
    let mut left: f64 = 0.0;
    let mut right: f64 = 0.0;
    let mut operator: char = '+';
    let mut verbose: bool = false;

    let mut parser = CommandLineParser::new("calculator")
        .about("Apply a binary operator to two numbers.")
        .add(Parameter::argument(Scalar::new(&mut left), "LEFT").help("The left operand."))
        .add(Parameter::argument(Scalar::new(&mut right), "RIGHT").help("The right operand."))
        .add(
            Parameter::option(Scalar::new(&mut operator), "op")
                .help("The operator: one of '+', '-', '*' or '/'."),
        )
        .add(Parameter::option(Switch::new(&mut verbose), "v").help("Show the full equation."))
        .build();

    parser.parse();
    drop(parser);

    let result = match operator {
        '+' => left + right,
        '-' => left - right,
        '*' => left * right,
        '/' => left / right,
        other => {
            eprintln!("Unknown operator '{other}'.");
            std::process::exit(1);
        }
    };

    if verbose {
        println!("{left} {operator} {right} = {result}");
    } else {
        println!("{result}");
    }
}
