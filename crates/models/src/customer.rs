use sea_orm::{
    entity::prelude::*, ActiveValue::NotSet, DatabaseConnection, PaginatorTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use serde::{Deserialize, Serialize};

use crate::{errors::ModelError, sales_order, timestamps};

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum CustomerStatus {
    #[sea_orm(string_value = "Active")]
    Active,
    #[sea_orm(string_value = "On Hold")]
    #[serde(rename = "On Hold")]
    OnHold,
    #[sea_orm(string_value = "Inactive")]
    Inactive,
}

impl Default for CustomerStatus {
    fn default() -> Self { Self::Active }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customers")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub entity_id: String,
    pub company_name: String,
    pub email: String,
    pub status: CustomerStatus,
    pub date_created: String,
    pub last_updated: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    SalesOrders,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::SalesOrders => Entity::has_many(sales_order::Entity).into(),
        }
    }
}

impl Related<sales_order::Entity> for Entity {
    fn to() -> RelationDef { Relation::SalesOrders.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Body of `POST /customer`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInput {
    pub company_name: String,
    pub email: String,
    #[serde(default)]
    pub status: CustomerStatus,
}

/// Body of `PUT /customer/{id}`; absent fields are left untouched.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPatch {
    pub company_name: Option<String>,
    pub email: Option<String>,
    pub status: Option<CustomerStatus>,
}

pub fn validate_company_name(name: &str) -> Result<(), ModelError> {
    if name.trim().is_empty() {
        return Err(ModelError::Validation("companyName required".into()));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), ModelError> {
    if !email.contains('@') {
        return Err(ModelError::Validation("invalid email".into()));
    }
    Ok(())
}

impl CustomerInput {
    pub fn validate(&self) -> Result<(), ModelError> {
        validate_company_name(&self.company_name)?;
        validate_email(&self.email)
    }
}

impl CustomerPatch {
    pub fn validate(&self) -> Result<(), ModelError> {
        if let Some(name) = &self.company_name { validate_company_name(name)?; }
        if let Some(email) = &self.email { validate_email(email)?; }
        Ok(())
    }
}

/// Display identifier derived from the internal id.
pub fn entity_id_for(id: i32) -> String {
    format!("CUST-{id}")
}

/// Insert a customer and stamp its `entityId` in the same transaction.
pub async fn create(db: &DatabaseConnection, input: &CustomerInput) -> Result<Model, ModelError> {
    input.validate()?;
    let txn = db.begin().await?;
    let inserted = ActiveModel {
        id: NotSet,
        entity_id: Set(String::new()),
        company_name: Set(input.company_name.clone()),
        email: Set(input.email.clone()),
        status: Set(input.status),
        date_created: Set(timestamps::now()),
        last_updated: Set(None),
    }
    .insert(&txn)
    .await?;
    let id = inserted.id;
    let mut am: ActiveModel = inserted.into();
    am.entity_id = Set(entity_id_for(id));
    let model = am.update(&txn).await?;
    txn.commit().await?;
    Ok(model)
}

pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find().order_by_asc(Column::Id).all(db).await?)
}

pub async fn find(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

/// Apply the supplied fields. `Ok(None)` when no customer has that id.
pub async fn update(db: &DatabaseConnection, id: i32, patch: &CustomerPatch) -> Result<Option<Model>, ModelError> {
    patch.validate()?;
    let txn = db.begin().await?;
    let Some(found) = Entity::find_by_id(id).one(&txn).await? else {
        return Ok(None);
    };
    let mut am: ActiveModel = found.into();
    if let Some(name) = &patch.company_name { am.company_name = Set(name.clone()); }
    if let Some(email) = &patch.email { am.email = Set(email.clone()); }
    if let Some(status) = patch.status { am.status = Set(status); }
    am.last_updated = Set(Some(timestamps::now()));
    let model = am.update(&txn).await?;
    txn.commit().await?;
    Ok(Some(model))
}

/// Remove a customer. Refused while sales orders still reference it.
pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, ModelError> {
    let txn = db.begin().await?;
    if Entity::find_by_id(id).one(&txn).await?.is_none() {
        return Ok(false);
    }
    let dependents = sales_order::Entity::find()
        .filter(sales_order::Column::CustomerId.eq(id))
        .count(&txn)
        .await?;
    if dependents > 0 {
        return Err(ModelError::Conflict(format!(
            "Customer ID {id} is referenced by {dependents} sales order(s)"
        )));
    }
    let res = Entity::delete_by_id(id).exec(&txn).await?;
    txn.commit().await?;
    Ok(res.rows_affected > 0)
}
