use dragclose_demo::Scenario;

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let scenarios = match std::env::args().nth(1) {
        Some(name) => vec![name.parse::<Scenario>()?],
        None => Scenario::ALL.to_vec(),
    };

    println!("=== Drag-to-close demo ===");
    for scenario in scenarios {
        let outcome = scenario.run()?;
        println!("{scenario:>16}: {outcome}");
    }
    Ok(())
}
