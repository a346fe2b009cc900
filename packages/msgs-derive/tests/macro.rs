use cosmwasm_schema::cw_serde;
use cosmwasm_std::testing::{MockApi, MockStorage};
use cosmwasm_std::{Addr, Storage};
use error_stack::{report, Report};
use msgs_derive::EnsurePermissions;
use relayer_wasm_std::permission_control;

#[cw_serde]
#[derive(EnsurePermissions)]
#[allow(dead_code)] // the fields only check that the derive handles every variant shape
enum GeneralMsg {
    #[permission(NoPrivilege)]
    NoPrivilege,
    #[permission(Admin)]
    Admin { fee: u64 },
    #[permission(Any)]
    Any(bool),
    #[permission(Admin, NoPrivilege)]
    Multi,
}

#[cw_serde]
#[derive(EnsurePermissions)]
enum WhitelistMsg {
    #[permission(Any)]
    Any,
    #[permission(Specific(endpoint))]
    FromEndpoint,
    #[permission(Admin, Specific(endpoint))]
    AdminOrEndpoint,
    #[permission(Specific(endpoint, relayer))]
    EndpointOrRelayer,
    #[permission(Specific(relayer))]
    FromRelayer,
}

#[derive(thiserror::Error, Debug)]
#[error("lookup failed")]
struct LookupFailed;

fn endpoint(_: &dyn Storage, _: &WhitelistMsg) -> error_stack::Result<Addr, LookupFailed> {
    Ok(MockApi::default().addr_make("endpoint"))
}

fn relayer(_: &dyn Storage, _: &WhitelistMsg) -> error_stack::Result<Addr, LookupFailed> {
    Ok(MockApi::default().addr_make("relayer"))
}

fn broken_lookup(_: &dyn Storage, _: &WhitelistMsg) -> error_stack::Result<Addr, LookupFailed> {
    Err(report!(LookupFailed))
}

fn is_denied<T>(result: Result<T, Report<permission_control::Error>>) -> bool {
    matches!(
        result.map(|_| ()).unwrap_err().current_context(),
        permission_control::Error::PermissionDenied { .. }
    )
}

fn is_not_whitelisted<T>(result: Result<T, Report<permission_control::Error>>) -> bool {
    matches!(
        result.map(|_| ()).unwrap_err().current_context(),
        permission_control::Error::AddressNotWhitelisted { .. }
    )
}

#[test]
fn general_permissions_follow_the_sender_role() {
    let user = MockApi::default().addr_make("user");
    let admin = MockApi::default().addr_make("admin");

    let mut storage = MockStorage::new();
    permission_control::set_admin(&mut storage, &admin).unwrap();

    assert!(GeneralMsg::NoPrivilege
        .ensure_permissions(&storage, &user)
        .is_ok());
    assert!(is_denied(
        GeneralMsg::NoPrivilege.ensure_permissions(&storage, &admin)
    ));

    assert!(GeneralMsg::Admin { fee: 1 }
        .ensure_permissions(&storage, &admin)
        .is_ok());
    assert!(is_denied(
        GeneralMsg::Admin { fee: 1 }.ensure_permissions(&storage, &user)
    ));

    assert!(GeneralMsg::Any(true)
        .ensure_permissions(&storage, &user)
        .is_ok());
    assert!(GeneralMsg::Any(true)
        .ensure_permissions(&storage, &admin)
        .is_ok());

    assert!(GeneralMsg::Multi.ensure_permissions(&storage, &user).is_ok());
    assert!(GeneralMsg::Multi.ensure_permissions(&storage, &admin).is_ok());
}

#[test]
fn admin_messages_are_denied_before_an_admin_is_set() {
    let storage = MockStorage::new();
    let user = MockApi::default().addr_make("user");

    assert!(is_denied(
        GeneralMsg::Admin { fee: 1 }.ensure_permissions(&storage, &user)
    ));
}

#[test]
fn specific_permissions_check_the_whitelist() {
    let api = MockApi::default();
    let user = api.addr_make("user");
    let admin = api.addr_make("admin");
    let endpoint_addr = api.addr_make("endpoint");
    let relayer_addr = api.addr_make("relayer");

    let mut storage = MockStorage::new();
    permission_control::set_admin(&mut storage, &admin).unwrap();

    assert!(WhitelistMsg::Any
        .ensure_permissions(&storage, &user, endpoint, relayer)
        .is_ok());

    assert!(WhitelistMsg::FromEndpoint
        .ensure_permissions(&storage, &endpoint_addr, endpoint, relayer)
        .is_ok());
    assert!(is_not_whitelisted(
        WhitelistMsg::FromEndpoint.ensure_permissions(&storage, &user, endpoint, relayer)
    ));
    assert!(is_not_whitelisted(
        WhitelistMsg::FromEndpoint.ensure_permissions(&storage, &admin, endpoint, relayer)
    ));

    assert!(WhitelistMsg::AdminOrEndpoint
        .ensure_permissions(&storage, &admin, endpoint, relayer)
        .is_ok());
    assert!(WhitelistMsg::AdminOrEndpoint
        .ensure_permissions(&storage, &endpoint_addr, endpoint, relayer)
        .is_ok());

    assert!(WhitelistMsg::EndpointOrRelayer
        .ensure_permissions(&storage, &relayer_addr, endpoint, relayer)
        .is_ok());
    assert!(is_not_whitelisted(
        WhitelistMsg::FromRelayer.ensure_permissions(&storage, &endpoint_addr, endpoint, relayer)
    ));
}

#[test]
fn failing_whitelist_lookup_is_reported() {
    let storage = MockStorage::new();
    let sender = MockApi::default().addr_make("endpoint");

    let err = WhitelistMsg::FromEndpoint
        .ensure_permissions(&storage, &sender, broken_lookup, relayer)
        .unwrap_err();

    assert!(matches!(
        err.current_context(),
        permission_control::Error::WhitelistNotFound { .. }
    ));
}

#[test]
fn closures_can_capture_the_whitelisted_address() {
    let storage = MockStorage::new();
    let relayer_addr = MockApi::default().addr_make("this-contract");

    assert!(WhitelistMsg::FromRelayer
        .ensure_permissions(&storage, &relayer_addr, endpoint, |_, _| {
            Ok::<_, Report<LookupFailed>>(relayer_addr.clone())
        })
        .is_ok());
}
