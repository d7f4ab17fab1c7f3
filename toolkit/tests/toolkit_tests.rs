//! Toolkit wrappers over a scripted indexer.

use std::io::Write;

use adakit::{
    AssetInventory, IndexerError, NetworkId, PolicyFilter, SignedMessage, Toolkit, ToolkitConfig,
};
use adakit_indexer::{paged_url, AssetLedgerClient, IndexerConfig};
use adakit_nullables::NullTransport;
use serde_json::json;

const BASE_URL: &str = "https://indexer.test/api/v0";
const POLICY: &str = "d5e6bf0500378d4f0da4e8dde6becec7621cd8cbf5cbb9b87013d4cc";
const NAME_HEX: &str = "537061636542756431";
const BASE_ADDRESS: &str = "addr1q9qdsyy3leg336a9esvvkaha9uudlg9ndxhd4sywqs9jus64e4wsh29mr0xn7cl0uyvj6z8l5wr6w05xquym3wnmkrkslye9za";
const STAKE_ADDRESS: &str = "stake1u92u6hgt4za3hnflv0h7zxfdprl68pa886rqwzdchfampmgy03sqj";
const ENTERPRISE_ADDRESS: &str = "addr1vym4ke6w88wshlp6ak8zdygyyu7m4ru3m5xajssy53jqw9gdz3p95";

fn toolkit() -> Toolkit<NullTransport> {
    let config = IndexerConfig::new(NetworkId::Mainnet, "mainnetProject").with_base_url(BASE_URL);
    Toolkit::with_indexer(AssetLedgerClient::new(&config, NullTransport::new()).unwrap())
}

fn transport(toolkit: &Toolkit<NullTransport>) -> &NullTransport {
    toolkit.indexer().unwrap().transport()
}

#[tokio::test]
async fn unconfigured_wrappers_fail_with_not_configured() {
    let toolkit = Toolkit::unconfigured(NetworkId::Testnet);

    assert!(!toolkit.has_indexer());
    assert!(matches!(toolkit.indexer(), Err(IndexerError::NotConfigured)));
    assert!(matches!(
        toolkit.nft_asset_owner(POLICY, "SpaceBud1").await,
        Err(IndexerError::NotConfigured)
    ));
    assert!(matches!(
        toolkit.asset_owners(POLICY, "SpaceBud1").await,
        Err(IndexerError::NotConfigured)
    ));
    assert!(matches!(
        toolkit.owned_assets(BASE_ADDRESS, &PolicyFilter::All).await,
        Err(IndexerError::NotConfigured)
    ));
    assert!(matches!(
        toolkit.policy_assets(POLICY).await,
        Err(IndexerError::NotConfigured)
    ));
    assert!(matches!(
        toolkit.asset_data(POLICY, "SpaceBud1").await,
        Err(IndexerError::NotConfigured)
    ));
}

#[tokio::test]
async fn address_handling_works_without_indexer() {
    let toolkit = Toolkit::unconfigured(NetworkId::Mainnet);
    let serialization = toolkit.serialization();

    assert_eq!(
        serialization.stake_address(BASE_ADDRESS).as_deref(),
        Some(STAKE_ADDRESS)
    );
    assert!(serialization.decode_address(ENTERPRISE_ADDRESS).is_some());
    assert!(!serialization.validate_signed_message(
        BASE_ADDRESS,
        &SignedMessage::new("00", "00"),
        b"payload"
    ));
}

#[test]
fn enable_indexer_switches_it_on() {
    let toolkit = Toolkit::unconfigured(NetworkId::Testnet)
        .enable_indexer("testnetProject")
        .unwrap();

    let indexer = toolkit.indexer().unwrap();
    assert_eq!(indexer.network(), NetworkId::Testnet);
    assert!(indexer.base_url().contains("testnet"));
}

#[test]
fn enable_indexer_rejects_blank_project_id() {
    assert!(matches!(
        Toolkit::unconfigured(NetworkId::Mainnet).enable_indexer("   "),
        Err(IndexerError::NotConfigured)
    ));
}

#[tokio::test]
async fn failures_become_none() {
    let toolkit = toolkit();

    assert_eq!(toolkit.nft_asset_owner(POLICY, "SpaceBud1").await.unwrap(), None);
    assert_eq!(toolkit.asset_owners(POLICY, "SpaceBud1").await.unwrap(), None);
    assert_eq!(toolkit.policy_assets(POLICY).await.unwrap(), None);
    assert_eq!(toolkit.asset_data(POLICY, "SpaceBud1").await.unwrap(), None);
    assert_eq!(
        toolkit
            .owned_assets(ENTERPRISE_ADDRESS, &PolicyFilter::All)
            .await
            .unwrap(),
        None
    );
}

#[tokio::test]
async fn successful_queries_pass_through() {
    let toolkit = toolkit();
    let owners = format!("{BASE_URL}/assets/{POLICY}{NAME_HEX}/addresses");
    transport(&toolkit).respond_ok(
        owners.clone(),
        json!([{ "address": "addr1owner", "quantity": "1" }]),
    );
    transport(&toolkit).with_pages(
        &format!("{BASE_URL}/accounts/{STAKE_ADDRESS}/addresses/assets"),
        vec![vec![json!({ "unit": format!("{POLICY}{NAME_HEX}"), "quantity": "1" })]],
    );

    assert_eq!(
        toolkit.nft_asset_owner(POLICY, "SpaceBud1").await.unwrap(),
        Some("addr1owner".to_string())
    );

    let inventory = toolkit
        .owned_assets(BASE_ADDRESS, &PolicyFilter::from(POLICY))
        .await
        .unwrap();
    let Some(AssetInventory::ByName(assets)) = inventory else {
        panic!("expected a flat inventory");
    };
    assert_eq!(assets["SpaceBud1"], 1.0);

    assert_eq!(
        transport(&toolkit).requested_urls(),
        vec![
            owners,
            paged_url(&format!("{BASE_URL}/accounts/{STAKE_ADDRESS}/addresses/assets"), 1),
            paged_url(&format!("{BASE_URL}/accounts/{STAKE_ADDRESS}/addresses/assets"), 2),
        ]
    );
}

#[test]
fn from_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
network = "testnet"
project_id = "testnetProject"
request_timeout_secs = 10
"#
    )
    .unwrap();

    let config = ToolkitConfig::from_toml_file(file.path()).unwrap();
    let toolkit = Toolkit::from_config(&config).unwrap();

    assert_eq!(toolkit.network(), NetworkId::Testnet);
    assert!(toolkit.has_indexer());
}

#[test]
fn from_config_without_project_id_disables_indexer() {
    let toolkit = Toolkit::from_config(&ToolkitConfig::default()).unwrap();

    assert_eq!(toolkit.network(), NetworkId::Mainnet);
    assert!(matches!(toolkit.indexer(), Err(IndexerError::NotConfigured)));
}
