extern crate clap;
extern crate logswitch;

use clap::{App, Arg};

fn run(debug: bool, verbose: bool, color: bool) -> Result<(), logswitch::Error> {
    let mut log = logswitch::Facade::builder()
        .debug(debug)
        .verbose(verbose)
        .color(color)
        .open("cmd-program")?;

    log.notice("MyProgram v0.0.1 starting up!")?;

    if verbose {
        log.info("verbose output enabled.")?;
    }

    for i in 0..5 {
        log.info(&format!("executing section: {}", i))?;

        log.debug(&format!("section {} 1/2 complete.", i))?;

        log.debug(&format!("section {} 2/2 complete.", i))?;

        log.info(&format!("section {} completed!", i))?;
    }

    log.warning("AHHH something's on fire.")?;

    log.notice("MyProgram operation completed, shutting down.")?;

    log.close()
}

fn main() {
    let matches = App::new("cmd-program")
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("log info and debug messages"),
        )
        .arg(
            Arg::with_name("debug")
                .short("d")
                .long("debug")
                .help("print on the terminal instead of sending to syslog"),
        )
        .arg(
            Arg::with_name("no-color")
                .long("no-color")
                .help("never color terminal output"),
        )
        .get_matches();

    if let Err(e) = run(
        matches.is_present("debug"),
        matches.is_present("verbose"),
        !matches.is_present("no-color"),
    ) {
        eprintln!("cmd-program: {}", e);
        std::process::exit(1);
    }
}
