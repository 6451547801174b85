use namecheap_sdk_rs::{DomainPrice, NamecheapClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Credentials come from NAMECHEAP_* variables; sandbox unless NAMECHEAP_USE_SANDBOX=false
    let client = NamecheapClient::from_env()?;

    let keyword = std::env::args().nth(1).unwrap_or_else(|| "example".to_string());
    println!("Searching available names for '{}'...", keyword);

    match client.enhanced().search_available(&keyword, None, true).await {
        Ok(found) if found.is_empty() => println!("\nNothing available"),
        Ok(found) => {
            println!("\n✓ {} available:", found.len());
            for domain in &found {
                let price = match domain.price {
                    DomainPrice::Premium(p) => format!("{:.2} (premium)", p),
                    DomainPrice::Regular(p) => format!("{:.2}", p),
                    DomainPrice::Unavailable => "price unavailable".to_string(),
                    DomainPrice::NotApplicable => "-".to_string(),
                };
                println!("  {:<30} {}", domain.domain, price);
            }
        }
        Err(e) => {
            println!("\n✗ Search failed [{}]: {}", e.code(), e);
        }
    }

    Ok(())
}
