//! API Routes
//!
//! HTTP endpoint definitions.

use axum::{
    extract::{Extension, Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::{delete, get, patch, post, put},
    Json, Router,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth;
use crate::domain::{
    ensure_owner, validate_money, Account, AccountType, Category, CategoryKind, Currency,
    Transaction, TransactionKind, User,
};
use crate::error::AppError;
use crate::handlers::{
    CreateAccountCommand, CreateAccountHandler, CreateTransactionCommand,
    CreateTransactionHandler, DeleteTransactionHandler, LoginCommand, LoginHandler, LoginOutcome,
    RegisterUserCommand, RegisterUserHandler,
};
use crate::ledger;
use crate::stats::{MonthlySummary, StatsService};
use crate::store::{
    AccountStore, CategoryStore, NewCategory, TransactionFilter, TransactionStore, UserStore,
};

use super::middleware::{bearer_token, AuthUser};

// =========================================================================
// Request/Response types
// =========================================================================

#[derive(Debug, Deserialize)]
pub struct UpdateMeRequest {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    pub name: String,
    pub account_type: AccountType,
    pub currency: Currency,
    #[serde(default)]
    pub balance: Decimal,
    #[serde(default)]
    pub bank_name: Option<String>,
    #[serde(default)]
    pub account_number: Option<String>,
}

/// Type, currency and balance are immutable through this endpoint, so any
/// attempt to send them is rejected outright.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateAccountRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bank_name: Option<String>,
    #[serde(default)]
    pub account_number: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SetBalanceRequest {
    pub balance: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CategoryKind,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

/// The kind of a category is fixed at creation.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateCategoryRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DefaultCategoriesResponse {
    pub created: u64,
}

#[derive(Debug, Deserialize)]
pub struct CreateTransactionRequest {
    pub account_id: Uuid,
    #[serde(default)]
    pub category_id: Option<Uuid>,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub description: String,
    /// Defaults to the current time when omitted.
    #[serde(default)]
    pub transaction_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub to_account_id: Option<Uuid>,
}

/// Amount, kind and account references are immutable once recorded; editing
/// those means deleting and re-creating the transaction.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateTransactionRequest {
    #[serde(default)]
    pub category_id: Option<Uuid>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub transaction_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct TransactionsQuery {
    #[serde(default)]
    pub account_id: Option<Uuid>,
    #[serde(default)]
    pub category_id: Option<Uuid>,
    #[serde(default, rename = "type")]
    pub kind: Option<TransactionKind>,
    #[serde(default)]
    pub date_from: Option<DateTime<Utc>>,
    #[serde(default)]
    pub date_to: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct MonthlyStatsQuery {
    pub year: i32,
    pub month: u32,
}

// =========================================================================
// Routers
// =========================================================================

/// Routes that need no session: registration and login.
pub fn auth_router() -> Router<PgPool> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Everything behind the bearer-token middleware.
pub fn create_router() -> Router<PgPool> {
    Router::new()
        // Session
        .route("/auth/logout", post(logout))
        // Profile
        .route("/users/me", get(get_me))
        .route("/users/me", patch(update_me))
        .route("/users/me", delete(delete_me))
        // Accounts
        .route("/accounts", post(create_account))
        .route("/accounts", get(list_accounts))
        .route("/accounts/:account_id", get(get_account))
        .route("/accounts/:account_id", patch(update_account))
        .route("/accounts/:account_id", delete(delete_account))
        .route("/accounts/:account_id/balance", put(set_account_balance))
        .route(
            "/accounts/:account_id/transactions",
            get(list_account_transactions),
        )
        // Categories
        .route("/categories", post(create_category))
        .route("/categories", get(list_categories))
        .route("/categories/defaults", post(materialize_default_categories))
        .route("/categories/:category_id", patch(update_category))
        .route("/categories/:category_id", delete(delete_category))
        // Transactions
        .route("/transactions", post(create_transaction))
        .route("/transactions", get(list_transactions))
        .route("/transactions/:transaction_id", get(get_transaction))
        .route("/transactions/:transaction_id", patch(update_transaction))
        .route("/transactions/:transaction_id", delete(delete_transaction))
        // Stats
        .route("/stats/monthly", get(monthly_stats))
}

// =========================================================================
// POST /auth/register
// =========================================================================

/// Register a new user
async fn register(
    State(pool): State<PgPool>,
    Json(command): Json<RegisterUserCommand>,
) -> Result<(StatusCode, Json<User>), AppError> {
    let handler = RegisterUserHandler::new(pool);
    let user = handler.execute(command).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

// =========================================================================
// POST /auth/login
// =========================================================================

/// Exchange credentials for a bearer token
async fn login(
    State(pool): State<PgPool>,
    Json(command): Json<LoginCommand>,
) -> Result<Json<LoginOutcome>, AppError> {
    let handler = LoginHandler::new(pool);
    let outcome = handler.execute(command).await?;

    Ok(Json(outcome))
}

// =========================================================================
// POST /auth/logout
// =========================================================================

/// Revoke the presented session token
async fn logout(State(pool): State<PgPool>, headers: HeaderMap) -> Result<StatusCode, AppError> {
    let token = bearer_token(&headers).ok_or(AppError::MissingBearerToken)?;
    auth::revoke_token(&pool, token).await?;

    Ok(StatusCode::NO_CONTENT)
}

// =========================================================================
// GET /users/me
// =========================================================================

/// Get the authenticated user's profile
async fn get_me(
    State(pool): State<PgPool>,
    Extension(auth_user): Extension<AuthUser>,
) -> Result<Json<User>, AppError> {
    let user = UserStore::new(pool)
        .fetch(auth_user.user_id)
        .await?
        .ok_or_else(|| AppError::UserNotFound(auth_user.user_id.to_string()))?;

    Ok(Json(user))
}

// =========================================================================
// PATCH /users/me
// =========================================================================

/// Update the authenticated user's names
async fn update_me(
    State(pool): State<PgPool>,
    Extension(auth_user): Extension<AuthUser>,
    Json(request): Json<UpdateMeRequest>,
) -> Result<Json<User>, AppError> {
    let first_name = request.first_name.as_deref().map(str::trim);
    let last_name = request.last_name.as_deref().map(str::trim);
    if first_name == Some("") || last_name == Some("") {
        return Err(AppError::Validation("Names cannot be empty".to_string()));
    }

    let store = UserStore::new(pool);
    store
        .fetch(auth_user.user_id)
        .await?
        .ok_or_else(|| AppError::UserNotFound(auth_user.user_id.to_string()))?;

    let user = store
        .update_names(auth_user.user_id, first_name, last_name)
        .await?;

    Ok(Json(user))
}

// =========================================================================
// DELETE /users/me
// =========================================================================

/// Deactivate the authenticated user and revoke every session
async fn delete_me(
    State(pool): State<PgPool>,
    Extension(auth_user): Extension<AuthUser>,
) -> Result<StatusCode, AppError> {
    UserStore::new(pool.clone())
        .deactivate(auth_user.user_id)
        .await?;
    auth::revoke_all_for_user(&pool, auth_user.user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

// =========================================================================
// POST /accounts
// =========================================================================

/// Open a new account
async fn create_account(
    State(pool): State<PgPool>,
    Extension(auth_user): Extension<AuthUser>,
    Json(request): Json<CreateAccountRequest>,
) -> Result<(StatusCode, Json<Account>), AppError> {
    let handler = CreateAccountHandler::new(pool);

    let account = handler
        .execute(
            auth_user.user_id,
            CreateAccountCommand {
                name: request.name,
                account_type: request.account_type,
                currency: request.currency,
                balance: request.balance,
                bank_name: request.bank_name,
                account_number: request.account_number,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(account)))
}

// =========================================================================
// GET /accounts
// =========================================================================

/// List the caller's active accounts
async fn list_accounts(
    State(pool): State<PgPool>,
    Extension(auth_user): Extension<AuthUser>,
) -> Result<Json<Vec<Account>>, AppError> {
    let accounts = AccountStore::new(pool)
        .list_active(auth_user.user_id)
        .await?;

    Ok(Json(accounts))
}

// =========================================================================
// GET /accounts/:account_id
// =========================================================================

/// Get one account
async fn get_account(
    State(pool): State<PgPool>,
    Extension(auth_user): Extension<AuthUser>,
    Path(account_id): Path<Uuid>,
) -> Result<Json<Account>, AppError> {
    let store = AccountStore::new(pool);
    let account = fetch_owned_account(&store, account_id, auth_user.user_id).await?;

    Ok(Json(account))
}

// =========================================================================
// PATCH /accounts/:account_id
// =========================================================================

/// Update an account's name or bank details
async fn update_account(
    State(pool): State<PgPool>,
    Extension(auth_user): Extension<AuthUser>,
    Path(account_id): Path<Uuid>,
    Json(request): Json<UpdateAccountRequest>,
) -> Result<Json<Account>, AppError> {
    let store = AccountStore::new(pool.clone());
    let account = fetch_owned_account(&store, account_id, auth_user.user_id).await?;

    let name = match request.name.as_deref().map(str::trim) {
        Some("") => {
            return Err(AppError::Validation(
                "Account name is required".to_string(),
            ))
        }
        other => other,
    };

    // Renaming re-checks uniqueness among the user's other active accounts.
    if let Some(name) = name {
        if name != account.name {
            let taken: bool = sqlx::query_scalar(
                r#"
                SELECT EXISTS (
                    SELECT 1 FROM accounts
                    WHERE user_id = $1 AND name = $2 AND is_active AND id <> $3
                )
                "#,
            )
            .bind(auth_user.user_id)
            .bind(name)
            .bind(account_id)
            .fetch_one(&pool)
            .await?;

            if taken {
                return Err(AppError::DuplicateName(name.to_string()));
            }
        }
    }

    let account = store
        .update_details(
            account_id,
            name,
            request.bank_name.as_deref(),
            request.account_number.as_deref(),
        )
        .await?;

    Ok(Json(account))
}

// =========================================================================
// DELETE /accounts/:account_id
// =========================================================================

/// Soft-delete an account; its transactions stay on record
async fn delete_account(
    State(pool): State<PgPool>,
    Extension(auth_user): Extension<AuthUser>,
    Path(account_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let store = AccountStore::new(pool);
    fetch_owned_account(&store, account_id, auth_user.user_id).await?;

    store.deactivate(account_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

// =========================================================================
// PUT /accounts/:account_id/balance
// =========================================================================

/// Overwrite an account's balance (manual correction)
async fn set_account_balance(
    State(pool): State<PgPool>,
    Extension(auth_user): Extension<AuthUser>,
    Path(account_id): Path<Uuid>,
    Json(request): Json<SetBalanceRequest>,
) -> Result<Json<Account>, AppError> {
    validate_money(request.balance)?;

    let store = AccountStore::new(pool.clone());
    fetch_owned_account(&store, account_id, auth_user.user_id).await?;

    let mut tx = pool.begin().await?;
    let account = ledger::set_balance(&mut tx, account_id, request.balance).await?;
    tx.commit().await?;

    Ok(Json(account))
}

// =========================================================================
// GET /accounts/:account_id/transactions
// =========================================================================

/// List transactions touching one account, as source or destination
async fn list_account_transactions(
    State(pool): State<PgPool>,
    Extension(auth_user): Extension<AuthUser>,
    Path(account_id): Path<Uuid>,
) -> Result<Json<Vec<Transaction>>, AppError> {
    let store = AccountStore::new(pool.clone());
    fetch_owned_account(&store, account_id, auth_user.user_id).await?;

    let filter = TransactionFilter {
        account_id: Some(account_id),
        ..Default::default()
    };
    let transactions = TransactionStore::new(pool)
        .list(auth_user.user_id, &filter)
        .await?;

    Ok(Json(transactions))
}

// =========================================================================
// POST /categories
// =========================================================================

/// Create a category
async fn create_category(
    State(pool): State<PgPool>,
    Extension(auth_user): Extension<AuthUser>,
    Json(request): Json<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<Category>), AppError> {
    let name = request.name.trim().to_string();
    if name.is_empty() {
        return Err(AppError::Validation(
            "Category name is required".to_string(),
        ));
    }

    let store = CategoryStore::new(pool);
    if store.active_name_taken(auth_user.user_id, &name, None).await? {
        return Err(AppError::DuplicateName(name));
    }

    let category = store
        .insert(NewCategory {
            user_id: auth_user.user_id,
            name,
            kind: request.kind,
            icon: request.icon,
            color: request.color,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(category)))
}

// =========================================================================
// GET /categories
// =========================================================================

/// List active categories, seeding the starter catalog on first use
async fn list_categories(
    State(pool): State<PgPool>,
    Extension(auth_user): Extension<AuthUser>,
) -> Result<Json<Vec<Category>>, AppError> {
    let store = CategoryStore::new(pool);

    let mut categories = store.list_active(auth_user.user_id).await?;
    if categories.is_empty() {
        store.materialize_defaults(auth_user.user_id).await?;
        categories = store.list_active(auth_user.user_id).await?;
    }

    Ok(Json(categories))
}

// =========================================================================
// POST /categories/defaults
// =========================================================================

/// Insert whichever starter categories the user is missing
async fn materialize_default_categories(
    State(pool): State<PgPool>,
    Extension(auth_user): Extension<AuthUser>,
) -> Result<Json<DefaultCategoriesResponse>, AppError> {
    let created = CategoryStore::new(pool)
        .materialize_defaults(auth_user.user_id)
        .await?;

    Ok(Json(DefaultCategoriesResponse { created }))
}

// =========================================================================
// PATCH /categories/:category_id
// =========================================================================

/// Update a category's name, icon or color
async fn update_category(
    State(pool): State<PgPool>,
    Extension(auth_user): Extension<AuthUser>,
    Path(category_id): Path<Uuid>,
    Json(request): Json<UpdateCategoryRequest>,
) -> Result<Json<Category>, AppError> {
    let store = CategoryStore::new(pool);
    let category = store
        .fetch(category_id)
        .await?
        .filter(|category| category.is_active)
        .ok_or_else(|| AppError::CategoryNotFound(category_id.to_string()))?;
    ensure_owner(&category, auth_user.user_id)?;

    let name = match request.name.as_deref().map(str::trim) {
        Some("") => {
            return Err(AppError::Validation(
                "Category name is required".to_string(),
            ))
        }
        other => other,
    };

    if let Some(name) = name {
        if store
            .active_name_taken(auth_user.user_id, name, Some(category_id))
            .await?
        {
            return Err(AppError::DuplicateName(name.to_string()));
        }
    }

    let category = store
        .update_details(
            category_id,
            name,
            request.icon.as_deref(),
            request.color.as_deref(),
        )
        .await?;

    Ok(Json(category))
}

// =========================================================================
// DELETE /categories/:category_id
// =========================================================================

/// Soft-delete a category; transactions keep their classification
async fn delete_category(
    State(pool): State<PgPool>,
    Extension(auth_user): Extension<AuthUser>,
    Path(category_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let store = CategoryStore::new(pool);
    let category = store
        .fetch(category_id)
        .await?
        .filter(|category| category.is_active)
        .ok_or_else(|| AppError::CategoryNotFound(category_id.to_string()))?;
    ensure_owner(&category, auth_user.user_id)?;

    store.deactivate(category_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

// =========================================================================
// POST /transactions
// =========================================================================

/// Record a transaction and move money accordingly
async fn create_transaction(
    State(pool): State<PgPool>,
    Extension(auth_user): Extension<AuthUser>,
    Json(request): Json<CreateTransactionRequest>,
) -> Result<(StatusCode, Json<Transaction>), AppError> {
    let handler = CreateTransactionHandler::new(pool);

    let transaction = handler
        .execute(
            auth_user.user_id,
            CreateTransactionCommand {
                account_id: request.account_id,
                category_id: request.category_id,
                kind: request.kind,
                amount: request.amount,
                description: request.description,
                transaction_date: request.transaction_date.unwrap_or_else(Utc::now),
                to_account_id: request.to_account_id,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(transaction)))
}

// =========================================================================
// GET /transactions
// =========================================================================

/// List the caller's transactions with optional filters
async fn list_transactions(
    State(pool): State<PgPool>,
    Extension(auth_user): Extension<AuthUser>,
    Query(query): Query<TransactionsQuery>,
) -> Result<Json<Vec<Transaction>>, AppError> {
    let filter = TransactionFilter {
        account_id: query.account_id,
        category_id: query.category_id,
        kind: query.kind,
        date_from: query.date_from,
        date_to: query.date_to,
    };

    let transactions = TransactionStore::new(pool)
        .list(auth_user.user_id, &filter)
        .await?;

    Ok(Json(transactions))
}

// =========================================================================
// GET /transactions/:transaction_id
// =========================================================================

/// Get one transaction
async fn get_transaction(
    State(pool): State<PgPool>,
    Extension(auth_user): Extension<AuthUser>,
    Path(transaction_id): Path<Uuid>,
) -> Result<Json<Transaction>, AppError> {
    let transaction = TransactionStore::new(pool)
        .fetch(transaction_id)
        .await?
        .ok_or_else(|| AppError::TransactionNotFound(transaction_id.to_string()))?;
    ensure_owner(&transaction, auth_user.user_id)?;

    Ok(Json(transaction))
}

// =========================================================================
// PATCH /transactions/:transaction_id
// =========================================================================

/// Reclassify a transaction without touching balances
async fn update_transaction(
    State(pool): State<PgPool>,
    Extension(auth_user): Extension<AuthUser>,
    Path(transaction_id): Path<Uuid>,
    Json(request): Json<UpdateTransactionRequest>,
) -> Result<Json<Transaction>, AppError> {
    let store = TransactionStore::new(pool.clone());
    let transaction = store
        .fetch(transaction_id)
        .await?
        .ok_or_else(|| AppError::TransactionNotFound(transaction_id.to_string()))?;
    ensure_owner(&transaction, auth_user.user_id)?;

    if let Some(category_id) = request.category_id {
        let category = CategoryStore::new(pool)
            .fetch(category_id)
            .await?
            .filter(|category| category.is_active)
            .ok_or_else(|| AppError::CategoryNotFound(category_id.to_string()))?;
        ensure_owner(&category, auth_user.user_id)?;
    }

    let transaction = store
        .update_details(
            transaction_id,
            request.category_id,
            request.description.as_deref(),
            request.transaction_date,
        )
        .await?;

    Ok(Json(transaction))
}

// =========================================================================
// DELETE /transactions/:transaction_id
// =========================================================================

/// Delete a transaction, reversing its balance effect
async fn delete_transaction(
    State(pool): State<PgPool>,
    Extension(auth_user): Extension<AuthUser>,
    Path(transaction_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let handler = DeleteTransactionHandler::new(pool);
    handler.execute(auth_user.user_id, transaction_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

// =========================================================================
// GET /stats/monthly
// =========================================================================

/// Income, expense and net totals for one calendar month
async fn monthly_stats(
    State(pool): State<PgPool>,
    Extension(auth_user): Extension<AuthUser>,
    Query(query): Query<MonthlyStatsQuery>,
) -> Result<Json<MonthlySummary>, AppError> {
    let summary = StatsService::new(pool)
        .monthly_totals(auth_user.user_id, query.year, query.month)
        .await?;

    Ok(Json(summary))
}

// =========================================================================
// Shared lookups
// =========================================================================

/// Fetch an active account the caller owns. Deactivated rows are reported
/// as missing; existence is checked before ownership.
async fn fetch_owned_account(
    store: &AccountStore,
    account_id: Uuid,
    user_id: Uuid,
) -> Result<Account, AppError> {
    let account = store
        .fetch(account_id)
        .await?
        .filter(|account| account.is_active)
        .ok_or_else(|| AppError::AccountNotFound(account_id.to_string()))?;
    ensure_owner(&account, user_id)?;

    Ok(account)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_create_account_request_defaults_balance_to_zero() {
        let json = r#"{
            "name": "Cash wallet",
            "account_type": "cash",
            "currency": "RSD"
        }"#;

        let request: CreateAccountRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.name, "Cash wallet");
        assert_eq!(request.account_type, AccountType::Cash);
        assert_eq!(request.currency, Currency::Rsd);
        assert_eq!(request.balance, Decimal::ZERO);
        assert!(request.bank_name.is_none());
    }

    #[test]
    fn test_create_transaction_request_uses_type_on_the_wire() {
        let json = r#"{
            "account_id": "550e8400-e29b-41d4-a716-446655440000",
            "type": "expense",
            "amount": "149.99",
            "description": "Groceries"
        }"#;

        let request: CreateTransactionRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.kind, TransactionKind::Expense);
        assert_eq!(request.amount, dec!(149.99));
        assert!(request.transaction_date.is_none());
        assert!(request.to_account_id.is_none());
    }

    #[test]
    fn test_create_transaction_request_accepts_numeric_amount() {
        let json = r#"{
            "account_id": "550e8400-e29b-41d4-a716-446655440000",
            "type": "income",
            "amount": 80000,
            "description": "Salary"
        }"#;

        let request: CreateTransactionRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.amount, dec!(80000));
    }

    #[test]
    fn test_update_account_request_rejects_balance_edits() {
        let json = r#"{"name": "Renamed", "balance": "99999.00"}"#;

        let result: Result<UpdateAccountRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_update_transaction_request_rejects_amount_edits() {
        let json = r#"{"description": "fixed", "amount": "1.00"}"#;

        let result: Result<UpdateTransactionRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_transactions_query_defaults_to_no_filters() {
        let query: TransactionsQuery = serde_json::from_str("{}").unwrap();
        assert!(query.account_id.is_none());
        assert!(query.category_id.is_none());
        assert!(query.kind.is_none());
        assert!(query.date_from.is_none());
        assert!(query.date_to.is_none());
    }

    #[test]
    fn test_category_request_uses_type_on_the_wire() {
        let json = r#"{"name": "Freelance", "type": "income"}"#;

        let request: CreateCategoryRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.kind, CategoryKind::Income);
        assert!(request.icon.is_none());
    }
}
