use anyhow::Result;

use super::fresh_db;
use crate::customer::{self, CustomerInput, CustomerStatus};
use crate::errors::ModelError;
use crate::sales_order::{self, SalesOrderInput, SalesOrderPatch, SalesOrderStatus};
use crate::timestamps;

async fn seed_customer(db: &sea_orm::DatabaseConnection) -> Result<customer::Model> {
    let input = CustomerInput {
        company_name: "Initech".into(),
        email: "billing@initech.test".into(),
        status: CustomerStatus::Active,
    };
    Ok(customer::create(db, &input).await?)
}

fn order_for(customer_id: i32) -> SalesOrderInput {
    SalesOrderInput { customer_id: Some(customer_id), total: 125.5, status: SalesOrderStatus::default(), trandate: None }
}

#[tokio::test]
async fn create_for_existing_customer() -> Result<()> {
    let (_dir, db) = fresh_db().await?;
    let c = seed_customer(&db).await?;

    let so = sales_order::create(&db, &order_for(c.id)).await?;
    assert_eq!(so.tran_id, format!("SO-{}", so.id));
    assert_eq!(so.customer_id, c.id);
    assert_eq!(so.status, SalesOrderStatus::PendingFulfillment);
    assert_eq!(so.trandate, timestamps::today());
    assert_eq!(sales_order::find(&db, so.id).await?, Some(so));
    Ok(())
}

#[tokio::test]
async fn unknown_customer_persists_nothing() -> Result<()> {
    let (_dir, db) = fresh_db().await?;

    let res = sales_order::create(&db, &order_for(999)).await;
    assert!(matches!(res, Err(ModelError::UnknownCustomer(999))));
    assert!(sales_order::list(&db).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn missing_customer_reference_is_a_validation_error() -> Result<()> {
    let (_dir, db) = fresh_db().await?;
    let input = SalesOrderInput { customer_id: None, ..order_for(1) };

    assert!(matches!(sales_order::create(&db, &input).await, Err(ModelError::Validation(_))));
    Ok(())
}

#[tokio::test]
async fn explicit_trandate_is_kept_and_checked() -> Result<()> {
    let (_dir, db) = fresh_db().await?;
    let c = seed_customer(&db).await?;

    let dated = SalesOrderInput { trandate: Some("2024-02-29".into()), ..order_for(c.id) };
    assert_eq!(sales_order::create(&db, &dated).await?.trandate, "2024-02-29");

    let bad = SalesOrderInput { trandate: Some("2024-02-30".into()), ..order_for(c.id) };
    assert!(matches!(sales_order::create(&db, &bad).await, Err(ModelError::Validation(_))));

    let negative = SalesOrderInput { total: -1.0, ..order_for(c.id) };
    assert!(matches!(sales_order::create(&db, &negative).await, Err(ModelError::Validation(_))));
    Ok(())
}

#[tokio::test]
async fn update_status_and_reassign_customer() -> Result<()> {
    let (_dir, db) = fresh_db().await?;
    let c1 = seed_customer(&db).await?;
    let c2 = seed_customer(&db).await?;
    let so = sales_order::create(&db, &order_for(c1.id)).await?;

    let patch = SalesOrderPatch { status: Some(SalesOrderStatus::Billed), customer_id: Some(c2.id), ..Default::default() };
    let updated = sales_order::update(&db, so.id, &patch).await?.expect("exists");
    assert_eq!(updated.status, SalesOrderStatus::Billed);
    assert_eq!(updated.customer_id, c2.id);
    assert_eq!(updated.total, so.total);
    assert!(updated.last_updated.is_some());

    let dangling = SalesOrderPatch { customer_id: Some(777), ..Default::default() };
    assert!(matches!(sales_order::update(&db, so.id, &dangling).await, Err(ModelError::UnknownCustomer(777))));
    assert_eq!(sales_order::find(&db, so.id).await?.map(|o| o.customer_id), Some(c2.id));
    Ok(())
}

#[tokio::test]
async fn customer_with_orders_cannot_be_deleted() -> Result<()> {
    let (_dir, db) = fresh_db().await?;
    let c = seed_customer(&db).await?;
    let so = sales_order::create(&db, &order_for(c.id)).await?;

    assert!(matches!(customer::delete(&db, c.id).await, Err(ModelError::Conflict(_))));
    assert!(customer::find(&db, c.id).await?.is_some());

    assert!(sales_order::delete(&db, so.id).await?);
    assert!(!sales_order::delete(&db, so.id).await?);
    assert!(customer::delete(&db, c.id).await?);
    Ok(())
}

#[test]
fn order_wire_shape() {
    let body = serde_json::json!({"entity": 3, "total": 10.0});
    let input: SalesOrderInput = serde_json::from_value(body).unwrap();
    assert_eq!(input.customer_id, Some(3));
    assert_eq!(input.status, SalesOrderStatus::PendingFulfillment);
    assert!(input.trandate.is_none());

    assert_eq!(serde_json::to_value(SalesOrderStatus::PendingBilling).unwrap(), "Pending Billing");
}
