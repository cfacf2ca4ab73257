use review_insights::ReviewAnalyzer;

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let product = "Samsung Galaxy M34 5G";
    let reviews = [
        "Excellent battery life! Lasts 2 days easily with moderate use.",
        "Display is vibrant and bright. AMOLED quality is superb.",
        "Performance is smooth for daily tasks but heats during heavy gaming.",
        "Good value for money. Camera quality could be better though.",
        "Build quality feels premium. Very satisfied with purchase.",
        "Charging speed is decent but not the fastest.",
        "UI is clean but comes with some bloatware apps.",
        "Speaker sound quality is average, not great for media consumption.",
    ];

    println!("📊 Analyzing {} reviews for {}", reviews.len(), product);
    let result = ReviewAnalyzer::new().analyze_texts(product, &reviews);

    println!("{}", serde_json::to_string_pretty(&result)?);

    println!("\n🔎 Aspects detected:");
    for (aspect, verdict) in &result.aspects {
        println!("\n{}:", aspect);
        println!("  Sentiment: {}", verdict.sentiment);
        println!("  Reason: {}", verdict.reason);
        println!("  Mentions: {}", verdict.count);
    }

    Ok(())
}
