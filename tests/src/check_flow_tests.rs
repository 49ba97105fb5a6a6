//! End-to-end check flows: config → RPC client → report.

use anyhow::Result;
use music_chain_checks::{
    check_balance, cli, verify_owner, BalancePolicy, Config, Error, Funding,
};
use music_chain_types::Amount;

use crate::utils::{client, spawn_node, MockNode};

const DEV_ACCOUNT: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";
const CONTRACT: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";
const OWNER_UPPER: &str = "0xABCDEF0123456789ABCDEF0123456789ABCDE123";
const OWNER_LOWER: &str = "0xabcdef0123456789abcdef0123456789abcde123";

fn config_for(url: &str) -> Config {
    Config {
        rpc_url: url.to_string(),
        contract_address: None,
        ..Config::default()
    }
}

// ── Balance ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_funded_signer_reports_sufficiency() -> Result<()> {
    // 0.01 ETH
    let node = MockNode::with_account(DEV_ACCOUNT).balance(DEV_ACCOUNT, "0x2386f26fc10000");
    let (url, node) = spawn_node(node).await?;
    let config = config_for(&url);

    let rpc = cli::connect(&config)?;
    let report = check_balance(&rpc, &config.balance_policy()?).await?;

    assert!(report.is_sufficient());
    let out = report.to_string();
    assert!(out.contains("Balance: 0.01 ETH"));
    assert!(out.contains("Sufficient balance for deployment"));
    assert!(!out.contains("Need:"));
    assert_eq!(node.methods(), vec!["eth_accounts", "eth_getBalance"]);
    Ok(())
}

#[tokio::test]
async fn test_underfunded_signer_reports_shortfall() -> Result<()> {
    // 0.002 ETH
    let node = MockNode::with_account(DEV_ACCOUNT).balance(DEV_ACCOUNT, "0x71afd498d0000");
    let (url, _node) = spawn_node(node).await?;
    let config = config_for(&url);

    let rpc = cli::connect(&config)?;
    let report = check_balance(&rpc, &config.balance_policy()?).await?;

    match report.funding {
        Funding::Shortfall { needed, fiat } => {
            assert_eq!(needed, Amount::parse("0.0046")?);
            assert_eq!(fiat.to_string(), "5.84");
        }
        Funding::Sufficient => panic!("0.002 must not cover 0.0066"),
    }
    let out = report.to_string();
    assert!(out.contains("Need: 0.0046 more ETH"));
    assert!(out.contains("Estimated cost: ~$5.84 USD"));
    Ok(())
}

#[tokio::test]
async fn test_configured_threshold_and_signer() -> Result<()> {
    let node = MockNode::default().balance(OWNER_LOWER, "0x71afd498d0000");
    let (url, node) = spawn_node(node).await?;
    let config = Config {
        signer: Some(OWNER_UPPER.into()),
        deploy_cost: "0.001".into(),
        ..config_for(&url)
    };

    let rpc = cli::connect(&config)?;
    let report = check_balance(&rpc, &config.balance_policy()?).await?;

    assert!(report.is_sufficient());
    assert_eq!(node.methods(), vec!["eth_getBalance"]);
    Ok(())
}

#[tokio::test]
async fn test_balance_fault_is_not_a_config_error() -> Result<()> {
    let node = MockNode::with_account(DEV_ACCOUNT).failing(-32000, "header not found");
    let (url, _node) = spawn_node(node).await?;

    let rpc = client(&url)?;
    let err = check_balance(&rpc, &BalancePolicy::default())
        .await
        .unwrap_err();
    assert!(!err.is_config());
    assert_eq!(err.exit_code(), 1);
    Ok(())
}

// ── Ownership ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_owner_match_ignores_letter_case() -> Result<()> {
    let node = MockNode::with_account(OWNER_LOWER).owner(CONTRACT, OWNER_UPPER);
    let (url, _node) = spawn_node(node).await?;
    let config = Config {
        contract_address: Some(CONTRACT.into()),
        ..config_for(&url)
    };

    let rpc = cli::connect(&config)?;
    let report = verify_owner(&rpc, config.contract_address()?).await?;

    assert!(report.signer_is_owner());
    assert!(report.to_string().contains("Signer is owner: true"));
    Ok(())
}

#[tokio::test]
async fn test_owner_mismatch_warns() -> Result<()> {
    let node = MockNode::with_account(DEV_ACCOUNT).owner(CONTRACT, OWNER_UPPER);
    let (url, _node) = spawn_node(node).await?;
    let config = Config {
        contract_address: Some(CONTRACT.into()),
        ..config_for(&url)
    };

    let rpc = cli::connect(&config)?;
    let report = verify_owner(&rpc, config.contract_address()?).await?;

    let out = report.to_string();
    assert!(out.contains("Signer is owner: false"));
    assert!(out.contains("WARNING"));
    Ok(())
}

#[tokio::test]
async fn test_unset_contract_address_makes_no_calls() -> Result<()> {
    let (url, node) = spawn_node(MockNode::with_account(DEV_ACCOUNT)).await?;
    let config = config_for(&url);

    let rpc = cli::connect(&config)?;
    let err = verify_owner(&rpc, config.contract_address()?)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::MissingConfig("CONTRACT_ADDRESS")));
    assert_eq!(err.exit_code(), 1);
    assert_eq!(node.calls(), 0);
    Ok(())
}

#[tokio::test]
async fn test_malformed_contract_address_is_rejected_before_binding() -> Result<()> {
    let config = Config {
        contract_address: Some("0xnot-an-address".into()),
        ..config_for("http://127.0.0.1:1")
    };
    let err = config.contract_address().unwrap_err();
    assert!(err.is_config());
    Ok(())
}
