use anyhow::Result;

use super::fresh_db;
use crate::customer::{self, CustomerInput, CustomerPatch, CustomerStatus};
use crate::errors::ModelError;

fn acme() -> CustomerInput {
    CustomerInput { company_name: "Acme Corp".into(), email: "ap@acme.test".into(), status: CustomerStatus::default() }
}

#[tokio::test]
async fn create_assigns_ids_and_defaults() -> Result<()> {
    let (_dir, db) = fresh_db().await?;

    let c = customer::create(&db, &acme()).await?;
    assert!(c.id > 0);
    assert_eq!(c.entity_id, format!("CUST-{}", c.id));
    assert_eq!(c.status, CustomerStatus::Active);
    assert!(c.last_updated.is_none());

    let again = customer::find(&db, c.id).await?.expect("persisted");
    assert_eq!(again, c);
    Ok(())
}

#[tokio::test]
async fn ids_are_unique_and_listed_in_order() -> Result<()> {
    let (_dir, db) = fresh_db().await?;

    let a = customer::create(&db, &acme()).await?;
    let b = customer::create(&db, &CustomerInput { company_name: "Globex".into(), ..acme() }).await?;
    assert_ne!(a.id, b.id);
    assert_ne!(a.entity_id, b.entity_id);

    let all = customer::list(&db).await?;
    let ids: Vec<i32> = all.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![a.id, b.id]);
    Ok(())
}

#[tokio::test]
async fn update_touches_only_supplied_fields() -> Result<()> {
    let (_dir, db) = fresh_db().await?;
    let c = customer::create(&db, &acme()).await?;

    let patch = CustomerPatch { status: Some(CustomerStatus::OnHold), ..Default::default() };
    let updated = customer::update(&db, c.id, &patch).await?.expect("exists");

    assert_eq!(updated.status, CustomerStatus::OnHold);
    assert_eq!(updated.company_name, c.company_name);
    assert_eq!(updated.email, c.email);
    assert_eq!(updated.entity_id, c.entity_id);
    assert_eq!(updated.date_created, c.date_created);
    assert!(updated.last_updated.is_some());
    Ok(())
}

#[tokio::test]
async fn update_and_delete_report_missing_rows() -> Result<()> {
    let (_dir, db) = fresh_db().await?;

    assert!(customer::update(&db, 4242, &CustomerPatch::default()).await?.is_none());
    assert!(!customer::delete(&db, 4242).await?);
    assert!(customer::find(&db, 4242).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn delete_removes_row() -> Result<()> {
    let (_dir, db) = fresh_db().await?;
    let c = customer::create(&db, &acme()).await?;

    assert!(customer::delete(&db, c.id).await?);
    assert!(customer::find(&db, c.id).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn invalid_fields_are_rejected_before_insert() -> Result<()> {
    let (_dir, db) = fresh_db().await?;

    let blank = CustomerInput { company_name: "   ".into(), ..acme() };
    assert!(matches!(customer::create(&db, &blank).await, Err(ModelError::Validation(_))));

    let bad_email = CustomerInput { email: "nobody".into(), ..acme() };
    assert!(matches!(customer::create(&db, &bad_email).await, Err(ModelError::Validation(_))));

    assert!(customer::list(&db).await?.is_empty());
    Ok(())
}

#[test]
fn status_wire_names() {
    assert_eq!(serde_json::to_value(CustomerStatus::OnHold).unwrap(), "On Hold");
    let s: CustomerStatus = serde_json::from_value(serde_json::json!("Active")).unwrap();
    assert_eq!(s, CustomerStatus::Active);
    assert!(serde_json::from_value::<CustomerStatus>(serde_json::json!("Deleted")).is_err());
}
