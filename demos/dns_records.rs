use namecheap_sdk_rs::{NamecheapClient, RecordType};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let client = NamecheapClient::from_env()?;

    let domain = std::env::args().nth(1).unwrap_or_else(|| "example.com".to_string());
    println!("Host records of {}:", domain);

    let hosts = client.dns().get_hosts(&domain).await?;
    for host in &hosts.hosts {
        println!("  {:<10} {:<6} {} (TTL {})", host.name, host.record_type, host.address, host.ttl);
    }

    if let Some(ip) = std::env::args().nth(2) {
        println!("\nPointing @ and www at {}...", ip);
        let result = client.enhanced().set_a_records(&domain, &ip).await?;
        println!("  success: {}", result.success);

        client
            .enhanced()
            .update_record(&domain, "_demo", RecordType::Txt, "updated by namecheap-sdk-rs", 300, None)
            .await?;
        println!("  added TXT record _demo");
    }

    Ok(())
}
