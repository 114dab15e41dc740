//! End-to-end routing tests: configuration → bootstrap → selector and resolver

use std::path::Path;
use std::sync::{Arc, Barrier};
use std::thread;

use dal_core::{DalBootstrap, DalConfig};
use dal_router::{
    ConnectionStringResolver, ConnectionStringSource, ReadWriteSplitting, ReplicaSelector,
    RouterError,
};
use dal_types::StatementContext;

const CONFIG: &str = r#"{
    "connection_strings": [
        { "name": "orders_m",   "value": "Server=m;Database=orders" },
        { "name": "orders_s10", "value": "Server=s10;Database=orders" },
        { "name": "orders_s50", "value": "Server=s50;Database=orders" },
        { "name": "orders_s30", "value": "Server=s30;Database=orders" },
        { "name": "users_m",    "value": "Server=u;Database=users" }
    ],
    "database_sets": [
        { "name": "orders", "databases": [
            { "name": "s10", "connection_string": "orders_s10", "database_type": "slave", "ratio": 10 },
            { "name": "s50", "connection_string": "orders_s50", "database_type": "slave", "ratio": 50 },
            { "name": "m",   "connection_string": "orders_m",   "database_type": "master" },
            { "name": "s30", "connection_string": "orders_s30", "database_type": "slave", "ratio": 30 }
        ] },
        { "name": "users", "databases": [
            { "name": "u", "connection_string": "users_m", "database_type": "master" }
        ] },
        { "name": "broken", "databases": [
            { "name": "a", "connection_string": "orders_m", "database_type": "master" },
            { "name": "b", "connection_string": "users_m",  "database_type": "master" }
        ] }
    ]
}"#;

fn load_bootstrap() -> Arc<DalBootstrap> {
    let config = DalConfig::from_json_str(CONFIG).unwrap();
    Arc::new(DalBootstrap::from_config(&config))
}

fn file_mode_bootstrap(locator: &Path, keys: &[&str]) -> Arc<DalBootstrap> {
    let mut config = DalConfig::from_json_str(CONFIG).unwrap();
    config.connection_strings = keys
        .iter()
        .map(|k| dal_core::ConnectionStringConfig {
            name: k.to_string(),
            value: String::new(),
        })
        .collect();
    config.connection_locator_path = Some(locator.to_path_buf());
    Arc::new(DalBootstrap::from_config(&config))
}

#[test]
fn test_statement_routes_to_connection_strings() {
    let bootstrap = load_bootstrap();
    let selector = ReplicaSelector::from_bootstrap(&bootstrap);
    let resolver = ConnectionStringResolver::new(bootstrap);

    let candidates = selector
        .select_candidates(&StatementContext::new("orders"))
        .unwrap();

    let resolved: Vec<String> = candidates
        .candidates()
        .map(|db| {
            resolver
                .resolve(&db.connection_string_name)
                .unwrap()
                .unwrap()
                .connection_string()
                .to_string()
        })
        .collect();

    assert_eq!(
        resolved,
        vec![
            "Server=s50;Database=orders",
            "Server=s30;Database=orders",
            "Server=s10;Database=orders",
            "Server=m;Database=orders",
        ]
    );
}

#[test]
fn test_replica_ordering_ends_with_master() {
    let selector = ReplicaSelector::from_bootstrap(&load_bootstrap());
    let ops = selector.select_for_set("orders").unwrap();

    let first = ops.first_candidate.as_ref().unwrap();
    assert_eq!(first.name, "s50");

    let others: Vec<&str> = ops.other_candidates.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(others, vec!["s30", "s10", "m"]);
    assert!(!ops.other_candidates.contains(first));
}

#[test]
fn test_master_only_set_has_no_candidates() {
    let selector = ReplicaSelector::from_bootstrap(&load_bootstrap());
    let ops = selector.select_for_set("users").unwrap();

    assert!(ops.first_candidate.is_none());
    assert!(ops.other_candidates.is_empty());
}

#[test]
fn test_misconfigured_sets_fail_loudly() {
    let selector: Box<dyn ReadWriteSplitting> =
        Box::new(ReplicaSelector::from_bootstrap(&load_bootstrap()));

    let err = selector
        .select_candidates(&StatementContext::new("broken"))
        .unwrap_err();
    assert!(matches!(err, RouterError::InvalidMasterCount { count: 2, .. }));
    assert!(err.to_string().contains("broken"));

    let err = selector
        .select_candidates(&StatementContext::new("missing"))
        .unwrap_err();
    assert!(err.to_string().contains("missing"));
}

#[test]
fn test_resolution_is_idempotent_and_miss_is_silent() {
    let resolver: Box<dyn ConnectionStringSource> =
        Box::new(ConnectionStringResolver::new(load_bootstrap()));

    let first = resolver.resolve("orders_m").unwrap().unwrap();
    let second = resolver.resolve("Orders_M").unwrap().unwrap();
    assert_eq!(first.connection_string(), second.connection_string());

    assert!(resolver.resolve("not_configured").unwrap().is_none());
}

#[test]
fn test_locator_early_exit_skips_malformed_tail() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("connections.xml");
    std::fs::write(
        &path,
        r#"<connectionStrings>
            <add name="orders_m" connectionString="Server=file-m;" />
            <add name="orders_s50" connectionString="Server=file-s50;" />
            <add name="orders_s30" />
        </connectionStrings>"#,
    )
    .unwrap();

    let resolver = ConnectionStringResolver::new(file_mode_bootstrap(&path, &["orders_m", "orders_s50"]));

    let entry = resolver.resolve_or_empty("orders_s50").unwrap();
    assert_eq!(entry.connection_string(), "Server=file-s50;");
    assert!(resolver.resolve_or_empty("orders_s30").unwrap().is_empty());
}

#[test]
fn test_locator_requested_entry_without_connection_string_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("connections.xml");
    std::fs::write(
        &path,
        r#"<add name="orders_m" connectionString="Server=file-m;" />
           <add name="orders_s30" providerName="mysql" />"#,
    )
    .unwrap();

    let resolver = ConnectionStringResolver::new(file_mode_bootstrap(&path, &["orders_m", "orders_s30"]));

    let err = resolver.resolve("orders_m").unwrap_err();
    assert!(matches!(err, RouterError::MissingAttribute { ref entry, .. } if entry == "orders_s30"));

    // No retry: the same failure is reported again
    assert!(matches!(resolver.resolve("orders_m"), Err(RouterError::MissingAttribute { .. })));
}

#[test]
fn test_concurrent_resolution() {
    const THREADS: usize = 16;
    const LOOKUPS: usize = 500;

    let resolver = Arc::new(ConnectionStringResolver::new(load_bootstrap()));
    let expected = resolver.resolve("orders_s30").unwrap().unwrap();
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let resolver = Arc::clone(&resolver);
            let barrier = Arc::clone(&barrier);
            let expected = expected.clone();
            thread::spawn(move || {
                barrier.wait();
                for n in 0..LOOKUPS {
                    let key = if (i + n) % 2 == 0 { "orders_s30" } else { "ORDERS_S30" };
                    let entry = resolver.resolve(key).unwrap().unwrap();
                    assert_eq!(entry, expected);
                    assert!(resolver.resolve("unknown").unwrap().is_none());
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_concurrent_first_use_initializes_once() {
    const THREADS: usize = 8;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("connections.xml");
    std::fs::write(
        &path,
        r#"<add name="orders_m" connectionString="Server=file-m;" />"#,
    )
    .unwrap();

    let resolver = Arc::new(ConnectionStringResolver::new(file_mode_bootstrap(&path, &["orders_m"])));
    let barrier = Arc::new(Barrier::new(THREADS));

    let results: Vec<String> = (0..THREADS)
        .map(|_| {
            let resolver = Arc::clone(&resolver);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                resolver
                    .resolve("orders_m")
                    .unwrap()
                    .unwrap()
                    .connection_string()
                    .to_string()
            })
        })
        .collect::<Vec<_>>()
        .into_iter()
        .map(|h| h.join().unwrap())
        .collect();

    assert!(results.iter().all(|cs| cs == "Server=file-m;"));
    assert_eq!(resolver.registered_names().unwrap(), vec!["orders_m".to_string()]);
}
