use crate::di::Services;
use iterdns_domain::{RecordType, ResourceRecord};
use std::io::Write;
use std::net::IpAddr;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Interactive command loop.
///
/// Commands: `lookup`/`l fqdn [type]`, `trace on|off`, `server IP`,
/// `dump`, `quit`/`exit`. A `#` starts a comment; blank lines are skipped.
pub async fn run(services: &Services) -> anyhow::Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        print!("DNSLOOKUP> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        // Ignore leading/trailing spaces and anything beyond a comment character.
        let line = line.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }

        let args: Vec<&str> = line.split_whitespace().collect();

        match args[0].to_lowercase().as_str() {
            "quit" | "exit" => break,
            "server" => cmd_server(services, &args),
            "trace" => cmd_trace(services, &args),
            "lookup" | "l" => cmd_lookup(services, &args).await,
            "dump" => cmd_dump(services),
            _ => {
                eprintln!("Invalid command. Valid commands are:");
                eprintln!("\tlookup fqdn [type]");
                eprintln!("\ttrace on|off");
                eprintln!("\tserver IP");
                eprintln!("\tdump");
                eprintln!("\tquit");
            }
        }
    }

    println!("Goodbye!");
    Ok(())
}

fn cmd_server(services: &Services, args: &[&str]) {
    if args.len() != 2 {
        println!("Invalid call. Format:\n\tserver IP");
        return;
    }

    match args[1].parse::<IpAddr>() {
        Ok(addr) => {
            services.resolver.set_root_server(addr);
            println!("Root DNS server is now: {}", addr);
        }
        Err(err) => println!("Invalid root server ({}).", err),
    }
}

fn cmd_trace(services: &Services, args: &[&str]) {
    match args {
        [_, arg] if arg.eq_ignore_ascii_case("on") => services.trace.set_enabled(true),
        [_, arg] if arg.eq_ignore_ascii_case("off") => services.trace.set_enabled(false),
        _ => {
            eprintln!("Invalid call. Format:\n\ttrace on|off");
            return;
        }
    }
    println!(
        "Verbose tracing is now: {}",
        if services.trace.is_enabled() { "ON" } else { "OFF" }
    );
}

async fn cmd_lookup(services: &Services, args: &[&str]) {
    let record_type = match args {
        [_, _] => RecordType::A,
        [_, _, type_arg] => match type_arg.parse::<RecordType>() {
            Ok(record_type) => record_type,
            Err(_) => {
                eprintln!("Invalid query type. Must be one of:\n\tA, AAAA, NS, MX, CNAME");
                return;
            }
        },
        _ => {
            eprintln!("Invalid call. Format:\n\tlookup hostName [type]");
            return;
        }
    };

    let host_name = args[1];
    let records = services.lookup.execute(host_name, record_type).await;
    print_results(host_name, record_type, &records);
}

fn cmd_dump(services: &Services) {
    for record in services.dump.execute() {
        print_record_line(&record.name, record.record_type, record.ttl as i64, &record.data);
    }
}

/// `hostName  type  ttl  value` in fixed-width columns; no records prints
/// one line with ttl -1 and value 0.0.0.0.
fn print_results(host_name: &str, record_type: RecordType, records: &[ResourceRecord]) {
    if records.is_empty() {
        print_record_line(host_name, record_type, -1, "0.0.0.0");
    }
    for record in records {
        print_record_line(host_name, record_type, record.ttl as i64, &record.data);
    }
}

fn print_record_line(host_name: &str, record_type: RecordType, ttl: i64, value: &str) {
    println!("{}", format_record_line(host_name, record_type, ttl, value));
}

fn format_record_line(host_name: &str, record_type: RecordType, ttl: i64, value: &str) -> String {
    format!(
        "{:<30} {:<5} {:<8} {}",
        host_name,
        record_type.to_string(),
        ttl,
        value
    )
}
