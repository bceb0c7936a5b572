//! Operator utility: drains one console list to exhaustion and writes
//! each record as a JSON line to stdout.

use std::env;

use config::Config;
use dotenvy::dotenv;
use serde::Serialize;

use glowcast_admin::domain::relation::RelationKind;
use glowcast_admin::domain::types::{DateRange, ObjectId};
use glowcast_admin::models::config::ConsoleConfig;
use glowcast_admin::pagination::{Feed, Identified};
use glowcast_admin::repository::http::HttpRepository;
use glowcast_admin::services::content::ContentListParams;
use glowcast_admin::services::ledger::LedgerListParams;
use glowcast_admin::services::users::UserListParams;
use glowcast_admin::services::{ServiceResult, agency, content, feed, ledger, payouts, relations, users};

const USAGE: &str = "usage: glowcast-admin <resource> [args]
  users [search]
  posts [search]
  videos [search]
  trades <trader-id> [purchase|sell]
  commissions <agency-id>
  relations <user-id> <followers|following|blocked|visitors>
  payouts [pending|approved|rejected]";

fn print_items<T: Serialize>(items: &[T]) {
    for item in items {
        match serde_json::to_string(item) {
            Ok(line) => println!("{line}"),
            Err(err) => log::error!("skipping unserializable record: {err}"),
        }
    }
}

async fn export<T, F, Fut>(label: &str, page_size: usize, fetch: F) -> ServiceResult<()>
where
    T: Identified + Serialize,
    F: FnMut(glowcast_admin::repository::Pagination) -> Fut,
    Fut: Future<Output = ServiceResult<(usize, Vec<T>)>>,
{
    let mut list = Feed::new(page_size);
    let pages = feed::drain(&mut list, fetch).await?;
    log::info!(
        "{label}: {} of {} records across {pages} pages",
        list.len(),
        list.total()
    );
    print_items(list.items());
    Ok(())
}

fn required_id(arg: Option<String>) -> Result<ObjectId, String> {
    arg.ok_or_else(|| "missing id argument".to_string())?
        .parse::<ObjectId>()
        .map_err(|e| e.to_string())
}

async fn run(repo: &HttpRepository, page_size: usize, mut args: env::Args) -> Result<(), String> {
    let resource = args.next().ok_or(USAGE.to_string())?;
    let result = match resource.as_str() {
        "users" => {
            let params = UserListParams {
                search: args.next(),
                ..Default::default()
            };
            export("users", page_size, |p| users::list_users(repo, &params, p)).await
        }
        "posts" => {
            let params = ContentListParams {
                search: args.next(),
                ..Default::default()
            };
            export("posts", page_size, |p| {
                content::list_posts(repo, &params, p)
            })
            .await
        }
        "videos" => {
            let params = ContentListParams {
                search: args.next(),
                ..Default::default()
            };
            export("videos", page_size, |p| {
                content::list_videos(repo, &params, p)
            })
            .await
        }
        "trades" => {
            let mut params = LedgerListParams::new(required_id(args.next())?);
            if let Some(kind) = args.next() {
                params.kind = Some(kind.parse().map_err(|e| format!("{e}"))?);
            }
            export("trades", page_size, |p| {
                ledger::list_trades(repo, &params, p)
            })
            .await
        }
        "commissions" => {
            let agency_id = required_id(args.next())?;
            export("commissions", page_size, |p| {
                agency::list_commissions(repo, &agency_id, DateRange::All, p)
            })
            .await
        }
        "relations" => {
            let user_id = required_id(args.next())?;
            let kind: RelationKind = args
                .next()
                .ok_or("missing relation kind".to_string())?
                .parse()
                .map_err(|e| format!("{e}"))?;
            export("relations", page_size, |p| {
                relations::list_relations(repo, &user_id, kind, p)
            })
            .await
        }
        "payouts" => {
            let status = match args.next() {
                Some(s) => Some(s.parse().map_err(|e| format!("{e}"))?),
                None => None,
            };
            export("payouts", page_size, |p| {
                payouts::list_payouts(repo, status, DateRange::All, p)
            })
            .await
        }
        _ => return Err(USAGE.to_string()),
    };
    result.map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let settings = Config::builder()
        .add_source(config::File::with_name("config/default"))
        .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
        .add_source(config::Environment::with_prefix("APP"))
        .build();

    let settings = match settings {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("Error loading settings: {err}");
            std::process::exit(1);
        }
    };

    let console_config = match settings.try_deserialize::<ConsoleConfig>() {
        Ok(console_config) => console_config,
        Err(err) => {
            log::error!("Error loading console config: {err}");
            std::process::exit(1);
        }
    };

    let repo = match HttpRepository::new(&console_config) {
        Ok(repo) => repo,
        Err(err) => {
            log::error!("Error building API client: {err}");
            std::process::exit(1);
        }
    };

    let mut args = env::args();
    args.next(); // program name

    if let Err(err) = run(&repo, console_config.page_size, args).await {
        log::error!("{err}");
        std::process::exit(2);
    }
}
