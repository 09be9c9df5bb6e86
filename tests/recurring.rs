//! Recurring plan and subscription operations against a recording transport.

mod common;

use std::sync::Arc;

use common::{RecordingTransport, billing_info, test_config, valid_visa};
use nmi_gateway::result::GatewayResult;
use nmi_gateway::{Error, Query, Recurring};

const PLAN_ADDED: &str = "response=1&responsetext=Plan Added&plan_id=p1";
const SUBSCRIPTION_ADDED: &str =
    "response=1&responsetext=Subscription Added&subscription_id=sub-42&transactionid=777";

fn client_with(body: &str) -> (Arc<RecordingTransport>, Recurring<Arc<RecordingTransport>>) {
    let transport = Arc::new(RecordingTransport::respond_with(body));
    let client = Recurring::with_transport(transport.clone(), &test_config());
    (transport, client)
}

fn monthly_plan() -> Query {
    Query::new()
        .set("plan_id", "p1")
        .set("plan_name", "Gold")
        .set("plan_amount", "10.00")
        .set("month_frequency", "1")
        .set("day_of_month", "1")
}

#[tokio::test]
async fn test_create_plan() {
    let (transport, client) = client_with(PLAN_ADDED);
    let result = client.create_plan(monthly_plan()).await.unwrap();

    assert!(result.is_success());
    assert_eq!(result.plan_id(), Some("p1"));

    let call = transport.last_call();
    assert_eq!(call.verb, "POST");
    assert_eq!(call.query.get("recurring"), Some("add_plan"));
    assert_eq!(call.query.get("type"), Some("recurring"));
    // Unspecified plan length means charging until canceled.
    assert_eq!(call.query.get("plan_payments"), Some("0"));
}

#[tokio::test]
async fn test_create_plan_keeps_an_explicit_payment_count() {
    let (transport, client) = client_with(PLAN_ADDED);
    client.create_plan(monthly_plan().set("plan_payments", "12")).await.unwrap();
    assert_eq!(transport.last_call().query.get("plan_payments"), Some("12"));
}

#[tokio::test]
async fn test_create_plan_names_every_missing_field() {
    let (transport, client) = client_with(PLAN_ADDED);
    let err = client.create_plan(Query::new().set("plan_id", "p1")).await.unwrap_err();
    match err {
        Error::MissingParameters { fields } => {
            assert_eq!(fields, vec!["plan_amount", "plan_name"]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn test_list_plans_uses_the_query_endpoint() {
    let (transport, client) = client_with("response=1&plan_id=p1&plan_name=Gold");
    client.list_plans(Query::new()).await.unwrap();
    let call = transport.last_call();
    assert_eq!(call.verb, "GET");
    assert_eq!(call.url, "https://gateway.test/api/query.php");
    assert_eq!(call.query.get("report_type"), Some("recurring_plans"));
}

#[tokio::test]
async fn test_add_subscription_to_plan() {
    let (transport, client) = client_with(SUBSCRIPTION_ADDED);
    let result = client
        .add_subscription_to_plan(billing_info(valid_visa()).set("plan_id", "p1"))
        .await
        .unwrap();

    assert!(result.is_success());
    assert_eq!(result.subscription_id(), Some("sub-42"));
    assert_eq!(result.transactionid(), Some("777"));

    let call = transport.last_call();
    assert_eq!(call.query.get("recurring"), Some("add_subscription"));
    assert_eq!(call.query.get("type"), Some("recurring"));

    assert!(matches!(
        client.add_subscription_to_plan(valid_visa()).await.unwrap_err(),
        Error::MissingParameters { .. }
    ));
}

#[tokio::test]
async fn test_add_custom_subscription_defaults_the_payment_count() {
    let (transport, client) = client_with(SUBSCRIPTION_ADDED);

    // plan_payments is filled in, so only the amount can be missing.
    let err = client.add_custom_subscription(valid_visa()).await.unwrap_err();
    match err {
        Error::MissingParameters { fields } => assert_eq!(fields, vec!["plan_amount"]),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(transport.call_count(), 0);

    client
        .add_custom_subscription(
            billing_info(valid_visa()).set("plan_amount", "5.00").set("month_frequency", "1"),
        )
        .await
        .unwrap();
    let call = transport.last_call();
    assert_eq!(call.query.get("plan_payments"), Some("0"));
    assert_eq!(call.query.get("recurring"), Some("add_subscription"));
}

#[tokio::test]
async fn test_update_subscription_requires_its_id() {
    let (transport, client) = client_with("response=1&responsetext=Subscription Updated");
    let err = client
        .update_subscription(Query::new().set("plan_amount", "12.00"))
        .await
        .unwrap_err();
    match err {
        Error::MissingParameters { fields } => assert_eq!(fields, vec!["subscription_id"]),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(transport.call_count(), 0);

    client
        .update_subscription(
            Query::new().set("subscription_id", "sub-42").set("plan_amount", "12.00"),
        )
        .await
        .unwrap();
    assert_eq!(transport.last_call().query.get("recurring"), Some("update_subscription"));
}

#[tokio::test]
async fn test_delete_subscription() {
    let (transport, client) = client_with("response=1&responsetext=Subscription Canceled");
    client.delete_subscription(Query::new().set("subscription_id", "sub-42")).await.unwrap();
    let call = transport.last_call();
    assert_eq!(call.query.get("recurring"), Some("delete_subscription"));
    assert_eq!(call.query.get("type"), Some("recurring"));

    assert!(matches!(
        client.delete_subscription(Query::new()).await.unwrap_err(),
        Error::MissingParameters { .. }
    ));
}
