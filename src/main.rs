use valence_classifier::app;

fn main() -> anyhow::Result<()> {
    app::main()
}
