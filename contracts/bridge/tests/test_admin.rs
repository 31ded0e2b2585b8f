//! Admin surface of the bridge: signer key lifecycle, pause, resource routes
//! forwarded to the generic handler, burnable flags and rollback policy.

use bridge::msg::{
    ConfigResponse, ExecuteMsg, InstantiateMsg, QueryMsg, ResourceResponse, ResourcesResponse,
};
use bridge::state::RollbackPolicy;
use bridge::verify::SignatureScheme;
use common::{GenericResourceSetup, Proposal, ResourceId};
use cosmwasm_std::{to_json_binary, Addr, Binary, Empty};
use cw_multi_test::{App, AppResponse, Contract, ContractWrapper, Executor};

use generic_handler::msg::{IsBurnableResponse, ResourceConfigResponse};

fn contract_bridge() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        bridge::contract::execute,
        bridge::contract::instantiate,
        bridge::contract::query,
    )
    .with_reply(bridge::contract::reply);
    Box::new(contract)
}

fn contract_handler() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        generic_handler::contract::execute,
        generic_handler::contract::instantiate,
        generic_handler::contract::query,
    )
    .with_reply(generic_handler::contract::reply);
    Box::new(contract)
}

struct Suite {
    app: App,
    admin: Addr,
    bridge: Addr,
    handler: Addr,
}

fn setup() -> Suite {
    let mut app = App::default();
    let admin = Addr::unchecked("admin");

    let bridge_code = app.store_code(contract_bridge());
    let bridge = app
        .instantiate_contract(
            bridge_code,
            admin.clone(),
            &InstantiateMsg {
                admin: admin.to_string(),
                domain_id: 2,
            },
            &[],
            "bridge",
            None,
        )
        .unwrap();

    let handler_code = app.store_code(contract_handler());
    let handler = app
        .instantiate_contract(
            handler_code,
            admin.clone(),
            &generic_handler::msg::InstantiateMsg {
                bridge: bridge.to_string(),
            },
            &[],
            "generic-handler",
            None,
        )
        .unwrap();

    Suite {
        app,
        admin,
        bridge,
        handler,
    }
}

impl Suite {
    fn exec_as(&mut self, sender: &Addr, msg: &ExecuteMsg) -> Result<AppResponse, String> {
        self.app
            .execute_contract(sender.clone(), self.bridge.clone(), msg, &[])
            .map_err(|err| err.root_cause().to_string())
    }

    fn exec(&mut self, msg: &ExecuteMsg) -> Result<AppResponse, String> {
        let admin = self.admin.clone();
        self.exec_as(&admin, msg)
    }

    fn config(&self) -> ConfigResponse {
        self.app
            .wrap()
            .query_wasm_smart(&self.bridge, &QueryMsg::Config {})
            .unwrap()
    }

    fn set_resource(&mut self, asset: &str, target: &str) -> Result<AppResponse, String> {
        let msg = ExecuteMsg::AdminSetResource {
            handler: self.handler.to_string(),
            resource_id: ResourceId::derive(asset, 1).to_binary(),
            target: target.to_string(),
            init_data: to_json_binary(&GenericResourceSetup {
                selector: Binary::from(b"stake".to_vec()),
                depositor_offset: Some(32),
            })
            .unwrap(),
        };
        self.exec(&msg)
    }
}

fn ed25519_key() -> Binary {
    let sk = ed25519_dalek::SigningKey::from_bytes(&[3u8; 32]);
    Binary::from(sk.verifying_key().to_bytes().to_vec())
}

fn has_event(res: &AppResponse, ty: &str) -> bool {
    let ty = format!("wasm-{}", ty);
    res.events.iter().any(|event| event.ty == ty)
}

// ============================================================================
// Signer Key & Pause
// ============================================================================

#[test]
fn test_bridge_is_paused_until_keygen() {
    let mut suite = setup();
    let relayer = Addr::unchecked("relayer");

    let err = suite
        .exec_as(
            &relayer,
            &ExecuteMsg::ExecuteProposal {
                proposal: Proposal {
                    origin_domain_id: 1,
                    deposit_nonce: 1,
                    resource_id: ResourceId::derive("stake", 1).to_binary(),
                    data: Binary::default(),
                },
                signature: Binary::default(),
            },
        )
        .unwrap_err();
    assert_eq!(err, "Bridge is paused");

    let err = suite.exec(&ExecuteMsg::AdminUnpause {}).unwrap_err();
    assert_eq!(err, "Signer key is not configured");
}

#[test]
fn test_end_keygen() {
    let mut suite = setup();

    let err = suite
        .exec_as(
            &Addr::unchecked("intruder"),
            &ExecuteMsg::EndKeygen {
                public_key: ed25519_key(),
                scheme: SignatureScheme::Ed25519,
            },
        )
        .unwrap_err();
    assert_eq!(err, "Unauthorized: sender doesn't have admin role");

    let err = suite
        .exec(&ExecuteMsg::EndKeygen {
            public_key: ed25519_key(),
            scheme: SignatureScheme::Secp256k1,
        })
        .unwrap_err();
    assert_eq!(err, "Invalid secp256k1 signer key: 32 bytes");

    let res = suite
        .exec(&ExecuteMsg::EndKeygen {
            public_key: ed25519_key(),
            scheme: SignatureScheme::Ed25519,
        })
        .unwrap();
    assert!(has_event(&res, "end_keygen"));

    let config = suite.config();
    assert!(!config.paused);
    assert_eq!(config.signer.unwrap().public_key, ed25519_key());

    let err = suite
        .exec(&ExecuteMsg::EndKeygen {
            public_key: ed25519_key(),
            scheme: SignatureScheme::Ed25519,
        })
        .unwrap_err();
    assert_eq!(err, "Signer key is already configured");
}

#[test]
fn test_pause_and_unpause() {
    let mut suite = setup();
    suite
        .exec(&ExecuteMsg::EndKeygen {
            public_key: ed25519_key(),
            scheme: SignatureScheme::Ed25519,
        })
        .unwrap();

    let err = suite.exec(&ExecuteMsg::AdminUnpause {}).unwrap_err();
    assert_eq!(err, "Update leaves the current value unchanged");

    let err = suite
        .exec_as(&Addr::unchecked("intruder"), &ExecuteMsg::AdminPause {})
        .unwrap_err();
    assert_eq!(err, "Unauthorized: sender doesn't have admin role");

    suite.exec(&ExecuteMsg::AdminPause {}).unwrap();
    assert!(suite.config().paused);
    let err = suite.exec(&ExecuteMsg::AdminPause {}).unwrap_err();
    assert_eq!(err, "Update leaves the current value unchanged");

    suite.exec(&ExecuteMsg::AdminUnpause {}).unwrap();
    assert!(!suite.config().paused);
}

#[test]
fn test_rollback_policy() {
    let mut suite = setup();
    assert_eq!(
        suite.config().rollback_policy,
        RollbackPolicy::InsufficientFeeOnly
    );

    let err = suite
        .exec(&ExecuteMsg::AdminSetRollbackPolicy {
            policy: RollbackPolicy::InsufficientFeeOnly,
        })
        .unwrap_err();
    assert_eq!(err, "Update leaves the current value unchanged");

    suite
        .exec(&ExecuteMsg::AdminSetRollbackPolicy {
            policy: RollbackPolicy::AllFailures,
        })
        .unwrap();
    assert_eq!(suite.config().rollback_policy, RollbackPolicy::AllFailures);
}

// ============================================================================
// Resource Registry
// ============================================================================

#[test]
fn test_set_resource_forwards_to_handler() {
    let mut suite = setup();
    let res = suite.set_resource("stake", "adapter").unwrap();
    assert!(has_event(&res, "set_resource"));

    let id = ResourceId::derive("stake", 1).to_binary();
    let route: ResourceResponse = suite
        .app
        .wrap()
        .query_wasm_smart(
            &suite.bridge,
            &QueryMsg::Resource {
                resource_id: id.clone(),
            },
        )
        .unwrap();
    assert_eq!(route.handler, suite.handler);
    assert_eq!(route.target, Addr::unchecked("adapter"));
    assert!(!route.is_burnable);

    let forwarded: ResourceConfigResponse = suite
        .app
        .wrap()
        .query_wasm_smart(
            &suite.handler,
            &generic_handler::msg::QueryMsg::ResourceConfig { resource_id: id },
        )
        .unwrap();
    assert_eq!(forwarded.target, Addr::unchecked("adapter"));
    assert_eq!(forwarded.depositor_offset, Some(32));

    // Overwrite points the route at a new target
    suite.set_resource("stake", "adapter2").unwrap();
    let route: ResourceResponse = suite
        .app
        .wrap()
        .query_wasm_smart(
            &suite.bridge,
            &QueryMsg::Resource {
                resource_id: ResourceId::derive("stake", 1).to_binary(),
            },
        )
        .unwrap();
    assert_eq!(route.target, Addr::unchecked("adapter2"));
}

#[test]
fn test_set_resource_validation() {
    let mut suite = setup();

    let err = suite
        .exec(&ExecuteMsg::AdminSetResource {
            handler: suite.handler.to_string(),
            resource_id: Binary::from(vec![1u8; 31]),
            target: "adapter".to_string(),
            init_data: Binary::default(),
        })
        .unwrap_err();
    assert!(err.starts_with("Invalid resource id"));

    let err = suite
        .exec_as(
            &Addr::unchecked("intruder"),
            &ExecuteMsg::AdminSetResource {
                handler: suite.handler.to_string(),
                resource_id: ResourceId::derive("stake", 1).to_binary(),
                target: "adapter".to_string(),
                init_data: Binary::default(),
            },
        )
        .unwrap_err();
    assert_eq!(err, "Unauthorized: sender doesn't have admin role");

    // The handler rejects init data it cannot parse; nothing is registered
    let err = suite
        .exec(&ExecuteMsg::AdminSetResource {
            handler: suite.handler.to_string(),
            resource_id: ResourceId::derive("stake", 1).to_binary(),
            target: "adapter".to_string(),
            init_data: Binary::from(b"not json".to_vec()),
        })
        .unwrap_err();
    assert!(err.contains("resource setup"));
    let res: ResourcesResponse = suite
        .app
        .wrap()
        .query_wasm_smart(
            &suite.bridge,
            &QueryMsg::Resources {
                start_after: None,
                limit: None,
            },
        )
        .unwrap();
    assert!(res.resources.is_empty());
}

#[test]
fn test_resources_pagination() {
    let mut suite = setup();
    for asset in ["a", "b", "c"] {
        suite.set_resource(asset, "adapter").unwrap();
    }

    let first: ResourcesResponse = suite
        .app
        .wrap()
        .query_wasm_smart(
            &suite.bridge,
            &QueryMsg::Resources {
                start_after: None,
                limit: Some(2),
            },
        )
        .unwrap();
    assert_eq!(first.resources.len(), 2);

    let rest: ResourcesResponse = suite
        .app
        .wrap()
        .query_wasm_smart(
            &suite.bridge,
            &QueryMsg::Resources {
                start_after: Some(first.resources[1].resource_id.clone()),
                limit: None,
            },
        )
        .unwrap();
    assert_eq!(rest.resources.len(), 1);
    assert!(!first
        .resources
        .iter()
        .any(|r| r.resource_id == rest.resources[0].resource_id));
}

#[test]
fn test_set_burnable() {
    let mut suite = setup();
    suite.set_resource("stake", "adapter").unwrap();

    let msg = ExecuteMsg::AdminSetBurnable {
        handler: suite.handler.to_string(),
        target: "adapter".to_string(),
    };
    let res = suite.exec(&msg).unwrap();
    assert!(has_event(&res, "set_burnable"));

    let err = suite.exec(&msg).unwrap_err();
    assert_eq!(err, "Update leaves the current value unchanged");

    let route: ResourceResponse = suite
        .app
        .wrap()
        .query_wasm_smart(
            &suite.bridge,
            &QueryMsg::Resource {
                resource_id: ResourceId::derive("stake", 1).to_binary(),
            },
        )
        .unwrap();
    assert!(route.is_burnable);

    let forwarded: IsBurnableResponse = suite
        .app
        .wrap()
        .query_wasm_smart(
            &suite.handler,
            &generic_handler::msg::QueryMsg::IsBurnable {
                target: "adapter".to_string(),
            },
        )
        .unwrap();
    assert!(forwarded.is_burnable);
}
