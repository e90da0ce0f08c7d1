//! currint-sum - Sum amounts of a single currency.

fn main() -> std::process::ExitCode {
    currint::cmd::sum_cmd::main()
}
