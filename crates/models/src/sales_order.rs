use sea_orm::{
    entity::prelude::*, ActiveValue::NotSet, ConnectionTrait, DatabaseConnection, QueryOrder, Set,
    TransactionTrait,
};
use serde::{Deserialize, Serialize};

use crate::{customer, errors::ModelError, timestamps};

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum SalesOrderStatus {
    #[sea_orm(string_value = "Pending Approval")]
    #[serde(rename = "Pending Approval")]
    PendingApproval,
    #[sea_orm(string_value = "Pending Fulfillment")]
    #[serde(rename = "Pending Fulfillment")]
    PendingFulfillment,
    #[sea_orm(string_value = "Pending Billing")]
    #[serde(rename = "Pending Billing")]
    PendingBilling,
    #[sea_orm(string_value = "Billed")]
    Billed,
    #[sea_orm(string_value = "Closed")]
    Closed,
    #[sea_orm(string_value = "Cancelled")]
    Cancelled,
}

impl Default for SalesOrderStatus {
    fn default() -> Self { Self::PendingFulfillment }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sales_orders")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub tran_id: String,
    /// Internal id of the owning customer.
    #[sea_orm(column_name = "entity")]
    #[serde(rename = "entity")]
    pub customer_id: i32,
    pub total: f64,
    pub status: SalesOrderStatus,
    pub trandate: String,
    pub last_updated: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Customer,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Customer => Entity::belongs_to(customer::Entity)
                .from(Column::CustomerId)
                .to(customer::Column::Id)
                .into(),
        }
    }
}

impl Related<customer::Entity> for Entity {
    fn to() -> RelationDef { Relation::Customer.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Body of `POST /salesorder`.
///
/// `entity` is optional at the serde level so a missing customer reference is
/// reported as a bad request rather than a body decoding failure.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SalesOrderInput {
    #[serde(rename = "entity", default)]
    pub customer_id: Option<i32>,
    pub total: f64,
    #[serde(default)]
    pub status: SalesOrderStatus,
    #[serde(default)]
    pub trandate: Option<String>,
}

/// Body of `PUT /salesorder/{id}`; absent fields are left untouched.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SalesOrderPatch {
    #[serde(rename = "entity")]
    pub customer_id: Option<i32>,
    pub total: Option<f64>,
    pub status: Option<SalesOrderStatus>,
    pub trandate: Option<String>,
}

pub fn validate_total(total: f64) -> Result<(), ModelError> {
    if !total.is_finite() || total < 0.0 {
        return Err(ModelError::Validation("total must be a non-negative amount".into()));
    }
    Ok(())
}

pub fn validate_trandate(trandate: &str) -> Result<(), ModelError> {
    if !timestamps::is_valid_date(trandate) {
        return Err(ModelError::Validation("trandate must be YYYY-MM-DD".into()));
    }
    Ok(())
}

impl SalesOrderInput {
    /// Returns the referenced customer id once the body passes field checks.
    pub fn validate(&self) -> Result<i32, ModelError> {
        let customer_id = self
            .customer_id
            .ok_or_else(|| ModelError::Validation("entity (customer id) required".into()))?;
        validate_total(self.total)?;
        if let Some(d) = &self.trandate { validate_trandate(d)?; }
        Ok(customer_id)
    }
}

impl SalesOrderPatch {
    pub fn validate(&self) -> Result<(), ModelError> {
        if let Some(total) = self.total { validate_total(total)?; }
        if let Some(d) = &self.trandate { validate_trandate(d)?; }
        Ok(())
    }
}

pub fn tran_id_for(id: i32) -> String {
    format!("SO-{id}")
}

async fn ensure_customer<C: ConnectionTrait>(conn: &C, customer_id: i32) -> Result<(), ModelError> {
    match customer::Entity::find_by_id(customer_id).one(conn).await? {
        Some(_) => Ok(()),
        None => Err(ModelError::UnknownCustomer(customer_id)),
    }
}

/// Insert an order for an existing customer and stamp its `tranId`.
pub async fn create(db: &DatabaseConnection, input: &SalesOrderInput) -> Result<Model, ModelError> {
    let customer_id = input.validate()?;
    let txn = db.begin().await?;
    ensure_customer(&txn, customer_id).await?;
    let inserted = ActiveModel {
        id: NotSet,
        tran_id: Set(String::new()),
        customer_id: Set(customer_id),
        total: Set(input.total),
        status: Set(input.status),
        trandate: Set(input.trandate.clone().unwrap_or_else(timestamps::today)),
        last_updated: Set(None),
    }
    .insert(&txn)
    .await?;
    let id = inserted.id;
    let mut am: ActiveModel = inserted.into();
    am.tran_id = Set(tran_id_for(id));
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

/// Apply the supplied fields. `Ok(None)` when no order has that id.
pub async fn update(db: &DatabaseConnection, id: i32, patch: &SalesOrderPatch) -> Result<Option<Model>, ModelError> {
    patch.validate()?;
    let txn = db.begin().await?;
    let Some(found) = Entity::find_by_id(id).one(&txn).await? else {
        return Ok(None);
    };
    if let Some(customer_id) = patch.customer_id {
        ensure_customer(&txn, customer_id).await?;
    }
    let mut am: ActiveModel = found.into();
    if let Some(customer_id) = patch.customer_id { am.customer_id = Set(customer_id); }
    if let Some(total) = patch.total { am.total = Set(total); }
    if let Some(status) = patch.status { am.status = Set(status); }
    if let Some(d) = &patch.trandate { am.trandate = Set(d.clone()); }
    am.last_updated = Set(Some(timestamps::now()));
    let model = am.update(&txn).await?;
    txn.commit().await?;
    Ok(Some(model))
}

pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}
