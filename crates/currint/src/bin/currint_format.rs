//! currint-format - Format an amount of money.

fn main() -> std::process::ExitCode {
    currint::cmd::format_cmd::main()
}
