use stress_test::{stress_test_private_deltas, stress_test_scaling, stress_test_shared_delta, StressConfig};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let rt = tokio::runtime::Runtime::new()?;
    let passed = rt.block_on(async_main(StressConfig::from_env()));
    if !passed {
        std::process::exit(1);
    }
    Ok(())
}

async fn async_main(config: StressConfig) -> bool {
    info!(?config, "starting delta push stress run");

    println!("\n\n╔════════════════════════════════════════════════════════════╗");
    println!("║            DELTA PUSH STRESS TESTS                         ║");
    println!("╚════════════════════════════════════════════════════════════╝");

    let mut all_passed = true;

    // Test 1: one delta per editor
    let stats = stress_test_private_deltas(&config).await;
    stats.print();
    all_passed &= stats.passed();

    // Test 2: every editor pushing into one mutex-guarded delta
    let stats = stress_test_shared_delta(&config).await;
    stats.print();
    all_passed &= stats.passed();

    // Test 3: Scaling analysis
    println!("\n\n╔════════════════════════════════════════════════════════════╗");
    println!("║          SCALING ANALYSIS (private deltas)                 ║");
    println!("╚════════════════════════════════════════════════════════════╝");
    all_passed &= stress_test_scaling(&config, 16, 4).await;

    if all_passed {
        println!("\n✓ All stress tests completed successfully!");
    } else {
        error!("canonical form was violated during the stress run");
    }
    all_passed
}
