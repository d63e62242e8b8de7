//! CLI command implementations

use std::time::Duration;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use modelprobe::config::ServiceConfig;
use modelprobe::hardware::HardwareFacts;
use modelprobe::service::OllamaClient;
use modelprobe::Suggestion;

pub fn probe(json: bool) -> Result<()> {
    let facts = HardwareFacts::detect();

    if json {
        println!("{}", serde_json::to_string_pretty(&facts)?);
        return Ok(());
    }

    print_report(&facts);
    Suggestion::for_system(facts.ram_gib, &facts.gpus).print();

    Ok(())
}

pub fn suggest(ram: Option<f64>) -> Result<()> {
    let facts = HardwareFacts::detect();
    let ram_gib = ram.unwrap_or(facts.ram_gib);

    Suggestion::for_system(ram_gib, &facts.gpus).print();

    Ok(())
}

fn print_report(facts: &HardwareFacts) {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("System Hardware Report");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  Operating System: {}", facts.os_label);
    println!("  Total RAM:        {} GB", facts.ram_gib);
    println!("  CPU Cores:        {}", facts.cpu_cores);
    for (i, gpu) in facts.gpus.iter().enumerate() {
        println!(
            "  GPU #{}:           {} ({}, VRAM: {} GB)",
            i + 1,
            gpu.name,
            gpu.kind,
            gpu.vram_gib
        );
    }
    println!(
        "  Storage:          {} {} GB (Mounted at {})",
        facts.disk.media, facts.disk.total_gib, facts.disk.mount_point
    );
    println!("  NPU:              {}", facts.npu);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
}

pub async fn test_models(
    url: Option<String>,
    prompt: Option<String>,
    timeout: Option<u64>,
) -> Result<()> {
    let mut config = ServiceConfig::default();
    if let Some(url) = url {
        config.base_url = url;
    }
    if let Some(prompt) = prompt {
        config.test_prompt = prompt;
    }
    if let Some(secs) = timeout {
        config.generate_timeout_secs = secs;
    }

    let client = OllamaClient::new(&config);

    let models = client.list_models().await;
    if models.is_empty() {
        return Ok(());
    }

    println!("Available models:");
    for model in &models {
        println!("- {}", model.name);
    }

    // One model at a time; a failing model never stops the rest
    for model in &models {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(ProgressStyle::default_spinner());
        spinner.set_message(format!("Testing {}", model.name));
        spinner.enable_steady_tick(Duration::from_millis(120));

        let outcome = client.test_model(&model.name, &config.test_prompt).await;
        spinner.finish_and_clear();

        match outcome {
            Ok(result) => {
                println!();
                println!("Model: {}", result.model);
                println!("Response: {}", result.text);
            }
            Err(err) => {
                println!();
                println!("Model: {}", model.name);
                println!("Error: {}", err);
            }
        }
    }

    Ok(())
}
