//! currint-currencies - List known currencies.

fn main() -> std::process::ExitCode {
    currint::cmd::currencies_cmd::main()
}
