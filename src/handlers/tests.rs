//! Integration tests for handlers
//!
//! These tests cover the command shapes and validation rules that need no
//! database. Full handler flows run in tests/integration_api.rs against a
//! live database.

#[cfg(test)]
mod tests {
    use crate::domain::{AccountType, Amount, Currency, TransactionKind};
    use crate::handlers::{
        CreateAccountCommand, CreateTransactionCommand, LoginCommand, RegisterUserCommand,
    };
    use crate::ledger;
    use chrono::Utc;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::str::FromStr;
    use uuid::Uuid;

    // =========================================================================
    // Auth command shapes
    // =========================================================================

    #[test]
    fn test_register_command_deserializes() {
        let cmd: RegisterUserCommand = serde_json::from_value(serde_json::json!({
            "email": "marko@example.com",
            "password": "correct horse",
            "first_name": "Marko",
            "last_name": "Petrović"
        }))
        .unwrap();

        assert_eq!(cmd.email, "marko@example.com");
        assert_eq!(cmd.password, "correct horse");
        assert_eq!(cmd.first_name, "Marko");
        assert_eq!(cmd.last_name, "Petrović");
    }

    #[test]
    fn test_register_command_rejects_missing_fields() {
        let result: Result<RegisterUserCommand, _> = serde_json::from_value(serde_json::json!({
            "email": "marko@example.com",
            "password": "correct horse"
        }));

        assert!(result.is_err());
    }

    #[test]
    fn test_login_command_deserializes() {
        let cmd: LoginCommand = serde_json::from_value(serde_json::json!({
            "email": "ana@example.com",
            "password": "hunter2hunter2"
        }))
        .unwrap();

        assert_eq!(cmd.email, "ana@example.com");
        assert_eq!(cmd.password, "hunter2hunter2");
    }

    // =========================================================================
    // Account command shapes
    // =========================================================================

    #[test]
    fn test_create_account_command_fields() {
        let cmd = CreateAccountCommand {
            name: "Main checking".to_string(),
            account_type: AccountType::Checking,
            currency: Currency::Rsd,
            balance: dec!(1000.00),
            bank_name: Some("Banca Intesa".to_string()),
            account_number: None,
        };

        assert_eq!(cmd.name, "Main checking");
        assert_eq!(cmd.account_type, AccountType::Checking);
        assert_eq!(cmd.currency, Currency::Rsd);
        assert_eq!(cmd.balance, dec!(1000.00));
        assert!(cmd.account_number.is_none());
    }

    // =========================================================================
    // Transaction command shapes
    // =========================================================================

    #[test]
    fn test_create_transaction_command_for_transfer() {
        let source = Uuid::new_v4();
        let destination = Uuid::new_v4();
        let cmd = CreateTransactionCommand {
            account_id: source,
            category_id: None,
            kind: TransactionKind::Transfer,
            amount: dec!(300.00),
            description: "Savings top-up".to_string(),
            transaction_date: Utc::now(),
            to_account_id: Some(destination),
        };

        assert_eq!(cmd.account_id, source);
        assert_eq!(cmd.to_account_id, Some(destination));
        assert_eq!(cmd.kind, TransactionKind::Transfer);
    }

    #[test]
    fn test_expense_command_needs_no_destination() {
        let cmd = CreateTransactionCommand {
            account_id: Uuid::new_v4(),
            category_id: Some(Uuid::new_v4()),
            kind: TransactionKind::Expense,
            amount: dec!(149.99),
            description: "Groceries".to_string(),
            transaction_date: Utc::now(),
            to_account_id: None,
        };

        assert!(cmd.to_account_id.is_none());
        assert!(cmd.category_id.is_some());
    }

    // =========================================================================
    // Amount validation at the handler boundary
    // =========================================================================

    #[test]
    fn test_handlers_accept_two_decimal_amounts() {
        let amount = Amount::new(dec!(100.50)).unwrap();
        assert_eq!(amount.value(), Decimal::from_str("100.50").unwrap());
    }

    #[test]
    fn test_handlers_reject_invalid_amounts() {
        let invalid = vec![
            dec!(0),          // zero moves no money
            dec!(-100),       // sign comes from the transaction kind
            dec!(10.123),     // finer than cents
            dec!(1000000001), // beyond the supported range
        ];

        for value in invalid {
            assert!(Amount::new(value).is_err(), "expected error for {}", value);
        }
    }

    // =========================================================================
    // Balance floor by account type
    // =========================================================================

    #[test]
    fn test_credit_account_may_run_negative() {
        assert!(ledger::ensure_balance_allowed(AccountType::Credit, dec!(-500.00)).is_ok());
    }

    #[test]
    fn test_cash_account_may_not_run_negative() {
        let result = ledger::ensure_balance_allowed(AccountType::Cash, dec!(-0.01));
        assert!(result.is_err());
    }
}
