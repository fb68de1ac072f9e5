fn main() -> anyhow::Result<()> {
    clipkeep_lib::bootstrap::run_blocking()
}
