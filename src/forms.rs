// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Input checks for the add-transaction and sign-in/sign-up forms.
//!
//! A rejected form is never submitted; the error's message is shown as is.

use crate::models::{EXPENSE_CATEGORIES, INCOME_CATEGORY, NewTransaction, ProfileData};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Please enter a valid description and a positive amount.")]
    InvalidTransaction,
    #[error("Unknown category '{0}'")]
    UnknownCategory(String),
    #[error("Please enter both email and password.")]
    MissingCredentials,
    #[error("You must accept the Terms of Services and Privacy Policy.")]
    TermsNotAccepted,
}

/// Largest amount a single transaction may carry.
// 1_000_000_000_000 (scale 0); `Decimal::new` is not const.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0);

#[derive(Debug, Clone)]
pub struct TransactionForm {
    pub description: String,
    pub amount: String,
    pub is_expense: bool,
    /// Ignored for income. `None` picks the first expense category.
    pub category: Option<String>,
}

impl TransactionForm {
    pub fn validate(&self, now: NaiveDateTime) -> Result<NewTransaction, FormError> {
        let amount = self.amount.trim().parse::<Decimal>().ok();
        let amount = match amount {
            Some(a) if a > Decimal::ZERO && a <= MAX_AMOUNT => a,
            _ => return Err(FormError::InvalidTransaction),
        };
        if self.description.trim().is_empty() {
            return Err(FormError::InvalidTransaction);
        }

        let category = if self.is_expense {
            let c = self
                .category
                .as_deref()
                .map(str::trim)
                .unwrap_or(EXPENSE_CATEGORIES[0]);
            // accept any casing, store the canonical spelling
            EXPENSE_CATEGORIES
                .iter()
                .find(|k| k.eq_ignore_ascii_case(c))
                .map(|k| k.to_string())
                .ok_or_else(|| FormError::UnknownCategory(c.to_string()))?
        } else {
            INCOME_CATEGORY.to_string()
        };

        Ok(NewTransaction {
            amount,
            category,
            date: now,
            description: self.description.clone(),
            is_expense: self.is_expense,
        })
    }
}

#[derive(Debug, Clone)]
pub struct SignIn {
    pub email: String,
    pub password: String,
}

impl SignIn {
    pub fn validate(&self) -> Result<(), FormError> {
        if self.email.trim().is_empty() || self.password.trim().is_empty() {
            return Err(FormError::MissingCredentials);
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct SignUp {
    pub email: String,
    pub password: String,
    pub terms_accepted: bool,
}

impl SignUp {
    /// On success returns `profile` with its email replaced by the new one.
    /// The password is not kept anywhere.
    pub fn validate(&self, profile: ProfileData) -> Result<ProfileData, FormError> {
        if !self.terms_accepted {
            return Err(FormError::TermsNotAccepted);
        }
        SignIn {
            email: self.email.clone(),
            password: self.password.clone(),
        }
        .validate()?;
        Ok(ProfileData {
            email: self.email.trim().to_string(),
            ..profile
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> NaiveDateTime {
        NaiveDateTime::parse_from_str("2025-08-10 12:00:00", "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn form(description: &str, amount: &str, is_expense: bool) -> TransactionForm {
        TransactionForm {
            description: description.into(),
            amount: amount.into(),
            is_expense,
            category: None,
        }
    }

    #[test]
    fn expense_defaults_to_first_category() {
        let t = form("Groceries", "12.50", true).validate(now()).unwrap();
        assert_eq!(t.category, "Food");
        assert_eq!(t.amount, Decimal::new(1250, 2));
        assert!(t.is_expense);
        assert_eq!(t.date, now());
    }

    #[test]
    fn income_is_always_income_category() {
        let mut f = form("Salary", "2000", false);
        f.category = Some("Pets".into());
        let t = f.validate(now()).unwrap();
        assert_eq!(t.category, INCOME_CATEGORY);
        assert!(!t.is_expense);
    }

    #[test]
    fn rejects_blank_description_and_bad_amounts() {
        let cases = [
            ("  ", "10"),
            ("Lunch", "abc"),
            ("Lunch", "0"),
            ("Lunch", "-3"),
            ("Lunch", ""),
        ];
        for (d, a) in cases {
            let err = form(d, a, true).validate(now()).unwrap_err();
            assert_eq!(err, FormError::InvalidTransaction);
            assert_eq!(
                err.to_string(),
                "Please enter a valid description and a positive amount."
            );
        }
    }

    #[test]
    fn amount_is_capped() {
        let t = form("House", "1000000000000", true).validate(now()).unwrap();
        assert_eq!(t.amount, MAX_AMOUNT);
        for a in ["1000000000000.01", "79228162514264337593543950335"] {
            assert_eq!(
                form("House", a, true).validate(now()).unwrap_err(),
                FormError::InvalidTransaction
            );
        }
    }

    #[test]
    fn expense_category_must_be_known() {
        let mut f = form("Bus", "2", true);
        f.category = Some("transport".into());
        assert_eq!(f.validate(now()).unwrap().category, "Transport");
        f.category = Some("Yachts".into());
        assert_eq!(
            f.validate(now()).unwrap_err(),
            FormError::UnknownCategory("Yachts".into())
        );
    }

    #[test]
    fn sign_in_needs_both_fields() {
        let ok = SignIn {
            email: "a@b.c".into(),
            password: "pw".into(),
        };
        assert!(ok.validate().is_ok());
        let blank = SignIn {
            email: "a@b.c".into(),
            password: " ".into(),
        };
        assert_eq!(blank.validate(), Err(FormError::MissingCredentials));
    }

    #[test]
    fn sign_up_requires_terms_and_sets_email() {
        let mut s = SignUp {
            email: " new@user.io ".into(),
            password: "secret".into(),
            terms_accepted: false,
        };
        assert_eq!(
            s.validate(ProfileData::default()),
            Err(FormError::TermsNotAccepted)
        );
        s.terms_accepted = true;
        let p = s.validate(ProfileData::default()).unwrap();
        assert_eq!(p.email, "new@user.io");
        assert_eq!(p.name, "Guest");
    }
}
