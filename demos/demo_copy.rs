use argbind::CommandLineParser;
use std::path::PathBuf;

fn main() {
    let mut source = PathBuf::default();
    let mut destination: Option<PathBuf> = None;
    let mut limit: u64 = 4096;
    let mut dry_run = false;

    let mut parser = CommandLineParser::new("copy")
        .register_positional("SOURCE", "The file to copy.", &mut source, true)
        .register_positional(
            "DEST",
            "Where to copy to (defaults to the working directory).",
            &mut destination,
            false,
        )
        .register_named("limit", "BYTES", "Copy at most this many bytes.", &mut limit)
        .register_switch("n", "Only show what would be copied.", &mut dry_run)
        .build();

    parser.parse();
    drop(parser);

    let destination = destination.unwrap_or_else(|| PathBuf::from("."));
    let action = if dry_run { "Would copy" } else { "Copying" };
    println!(
        "{action} at most {limit} bytes from {s} to {d}.",
        s = source.display(),
        d = destination.display()
    );
}
