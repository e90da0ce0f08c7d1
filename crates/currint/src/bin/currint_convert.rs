//! currint-convert - Convert an amount into another currency.

fn main() -> std::process::ExitCode {
    currint::cmd::convert_cmd::main()
}
