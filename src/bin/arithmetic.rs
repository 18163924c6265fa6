use compy::{cli_main, ProgramKind};

fn main() {
    std::process::exit(cli_main(ProgramKind::Arithmetic));
}
