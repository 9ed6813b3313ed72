fn main() -> anyhow::Result<()> {
    shortener_app::run_app()
}
