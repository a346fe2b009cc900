use cosmwasm_std::testing::MockApi;
use cosmwasm_std::{
    coins, Addr, Api, Attribute, BankMsg, CanonicalAddr, Event, HexBinary, Uint128,
};
use cw_multi_test::{App, AppResponse, Executor};
use gas_relayer::msg::ExecuteMsg;
use integration_tests::contract::Contract;
use integration_tests::gas_relayer_contract::GasRelayerContract;
use integration_tests::lz_endpoint_contract::LzEndpointContract;
use integration_tests::protocol::{Chain, Protocol};
use lz_endpoint_api::ChainId;

pub const DENOM: &str = "uatom";
pub const BASE_FEE: u128 = 1_000;
pub const FEE_PER_BYTE: u128 = 10;
pub const PROTOCOL_FEE: u128 = 5_000;
pub const DELIVERY_AMOUNT: u128 = 1_000_000;

pub const CHAIN_A: ChainId = ChainId::new(10102);
pub const CHAIN_B: ChainId = ChainId::new(10109);

/// Endpoint fee for a relay payload: the base fee plus 32 bytes of abi encoded recipient
pub const NATIVE_FEE: u128 = 1_320;

pub fn setup_protocol() -> Protocol {
    let api = MockApi::default();
    let genesis = api.addr_make("genesis");
    let app = App::new(|router, _, storage| {
        router
            .bank
            .init_balance(storage, &genesis, coins(u128::MAX, DENOM))
            .unwrap()
    });

    Protocol {
        genesis_address: genesis,
        admin_address: api.addr_make("admin"),
        app,
    }
}

pub fn setup_chain(protocol: &mut Protocol, chain_id: ChainId) -> Chain {
    let endpoint = LzEndpointContract::instantiate_contract(
        &mut protocol.app,
        protocol.admin_address.clone(),
        chain_id,
        DENOM,
        Uint128::new(BASE_FEE),
        Uint128::new(FEE_PER_BYTE),
    );
    let gas_relayer = GasRelayerContract::instantiate_contract(
        &mut protocol.app,
        protocol.admin_address.clone(),
        endpoint.contract_addr.clone(),
        DENOM,
        Uint128::new(PROTOCOL_FEE),
        Uint128::new(DELIVERY_AMOUNT),
        vec![],
    );

    Chain {
        chain_id,
        endpoint,
        gas_relayer,
    }
}

/// Connects the relayers of two chains with each other: each trusts the other as its remote and
/// each endpoint knows where to route messages for the other chain's relayer.
pub fn connect_chains(protocol: &mut Protocol, a: &Chain, b: &Chain) {
    for (local, remote) in [(a, b), (b, a)] {
        trust_remote(protocol, local, remote.chain_id, &remote.gas_relayer.contract_addr);

        local
            .endpoint
            .execute(
                &mut protocol.app,
                protocol.admin_address.clone(),
                &lz_endpoint_mock::msg::ExecuteMsg::SetDestLzEndpoint {
                    destination: remote.gas_relayer.contract_addr.to_string(),
                    endpoint: remote.endpoint.contract_addr.to_string(),
                },
            )
            .unwrap();
    }
}

pub fn trust_remote(protocol: &mut Protocol, local: &Chain, chain_id: ChainId, remote: &Addr) {
    let remote_address = address_bytes(&protocol.app, remote);

    local
        .gas_relayer
        .execute(
            &mut protocol.app,
            protocol.admin_address.clone(),
            &ExecuteMsg::SetTrustedRemoteAddress {
                chain_id,
                remote_address,
            },
        )
        .unwrap();
}

pub fn setup_connected_chains() -> (Protocol, Chain, Chain) {
    let mut protocol = setup_protocol();
    let chain_a = setup_chain(&mut protocol, CHAIN_A);
    let chain_b = setup_chain(&mut protocol, CHAIN_B);
    connect_chains(&mut protocol, &chain_a, &chain_b);

    (protocol, chain_a, chain_b)
}

pub fn fund(protocol: &mut Protocol, recipient: &Addr, amount: u128) {
    protocol
        .app
        .execute(
            protocol.genesis_address.clone(),
            BankMsg::Send {
                to_address: recipient.to_string(),
                amount: coins(amount, DENOM),
            }
            .into(),
        )
        .unwrap();
}

pub fn top_up(protocol: &mut Protocol, chain: &Chain, amount: u128) {
    chain
        .gas_relayer
        .execute_with_funds(
            &mut protocol.app,
            protocol.genesis_address.clone(),
            &ExecuteMsg::TopUp,
            &coins(amount, DENOM),
        )
        .unwrap();
}

pub fn balance(app: &App, addr: &Addr) -> u128 {
    app.wrap().query_balance(addr, DENOM).unwrap().amount.u128()
}

pub fn address_bytes(app: &App, addr: &Addr) -> HexBinary {
    app.api()
        .addr_canonicalize(addr.as_str())
        .unwrap()
        .to_vec()
        .into()
}

/// A recipient in the 20 byte format of the remote chain and its address on this chain.
pub fn recipient(app: &App) -> (HexBinary, Addr) {
    let bytes = vec![0xca; 20];
    let addr = app
        .api()
        .addr_humanize(&CanonicalAddr::from(bytes.clone()))
        .unwrap();

    (bytes.into(), addr)
}

pub fn get_event_attribute<'a>(
    events: &'a [Event],
    event_type: &str,
    attribute_name: &str,
) -> Option<&'a Attribute> {
    events
        .iter()
        .find(|ev| ev.ty == event_type)?
        .attributes
        .iter()
        .find(|attribute| attribute.key == attribute_name)
}

pub fn has_event(response: &AppResponse, event_type: &str) -> bool {
    response.events.iter().any(|ev| ev.ty == event_type)
}
