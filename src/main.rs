use dh_groups::StrengthClass;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Serialize)]
struct GroupReport {
    strength: StrengthClass,
    ike_group_id: u16,
    bits: u64,
    generator: String,
    modulus: String,
    fingerprint: String,
}

fn main() {
    // Logs go to stderr so stdout stays machine readable.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let reports: Vec<GroupReport> = StrengthClass::ALL
        .into_iter()
        .map(|strength| {
            let group = strength.group();
            GroupReport {
                strength,
                ike_group_id: strength.ike_group_id(),
                bits: group.bits(),
                generator: group.generator_hex(),
                modulus: group.modulus_hex(),
                fingerprint: group.fingerprint(),
            }
        })
        .collect();

    info!(
        groups = reports.len(),
        initializations = dh_groups::initialization_count(),
        "canonical DH groups loaded"
    );

    match serde_json::to_string_pretty(&reports) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Failed to encode report: {}", e);
            ::std::process::exit(1);
        }
    }
}
