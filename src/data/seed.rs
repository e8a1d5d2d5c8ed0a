//! Seed collections
//!
//! The fixed reference data behind every screen. Dates are concentrated in
//! late January 2026 so the bills screen shows a mix of urgent and
//! comfortable due dates around that period.

use chrono::NaiveDate;

use crate::models::{
    Account, AccountType, Bank, Bill, BillCategory, Contact, Direction, Notification,
    NotificationKind, Rupiah, Transaction, TransactionCategory, UserProfile,
};

use super::BalancePoint;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // Seed dates are literals and always valid
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

/// The signed-in user
pub fn user() -> UserProfile {
    UserProfile::new("Wahyu Hidayat", Rupiah::from_units(9_822_211_927))
}

/// Customer accounts
pub fn accounts() -> Vec<Account> {
    vec![
        Account::new(
            AccountType::Savings,
            "Taplus Muda",
            "0812345678",
            Rupiah::from_units(5_422_211_927),
        ),
        Account::new(
            AccountType::Savings,
            "Tabungan Bisnis",
            "0887654321",
            Rupiah::from_units(4_400_000_000),
        ),
        Account::new(
            AccountType::Credit,
            "Kartu Kredit Platinum",
            "4111 **** **** 1234",
            Rupiah::from_units(-12_500_000),
        ),
        Account::new(
            AccountType::Investment,
            "Reksadana Campuran",
            "RD-001234",
            Rupiah::from_units(250_000_000),
        ),
        Account::new(
            AccountType::Insurance,
            "Asuransi Jiwa",
            "INS-005678",
            Rupiah::from_units(500_000_000),
        ),
    ]
}

/// Activity feed, newest first
pub fn transactions() -> Vec<Transaction> {
    vec![
        Transaction::new(
            Direction::Debit,
            Rupiah::from_units(520_000_000),
            "Transfer ke PT Rajawali Indo Wisesa",
            date(2026, 1, 26),
            TransactionCategory::Transfer,
        ),
        Transaction::new(
            Direction::Debit,
            Rupiah::from_units(15_000_000),
            "Transfer ke PT Maju Jaya",
            date(2026, 1, 25),
            TransactionCategory::Transfer,
        ),
        Transaction::new(
            Direction::Credit,
            Rupiah::from_units(85_000_000),
            "Pembayaran Invoice #2024",
            date(2026, 1, 24),
            TransactionCategory::Income,
        ),
        Transaction::new(
            Direction::Debit,
            Rupiah::from_units(2_500_000),
            "Tokopedia",
            date(2026, 1, 23),
            TransactionCategory::Shopping,
        ),
        Transaction::new(
            Direction::Debit,
            Rupiah::from_units(3_500_000),
            "PLN Postpaid",
            date(2026, 1, 22),
            TransactionCategory::Bills,
        ),
        Transaction::new(
            Direction::Credit,
            Rupiah::from_units(150_000_000),
            "Transfer dari PT ABC",
            date(2026, 1, 21),
            TransactionCategory::Transfer,
        ),
        Transaction::new(
            Direction::Debit,
            Rupiah::from_units(750_000),
            "GrabFood",
            date(2026, 1, 20),
            TransactionCategory::Food,
        ),
        Transaction::new(
            Direction::Debit,
            Rupiah::from_units(500_000),
            "Telkomsel Postpaid",
            date(2026, 1, 19),
            TransactionCategory::Topup,
        ),
    ]
}

/// Outstanding utility bills
pub fn bills() -> Vec<Bill> {
    vec![
        Bill::new(
            "PLN Pascabayar",
            "PLN",
            "12345678901",
            Rupiah::from_units(3_500_000),
            date(2026, 1, 28),
            true,
            BillCategory::Electricity,
        ),
        Bill::new(
            "PDAM",
            "PDAM Jakarta",
            "9876543210",
            Rupiah::from_units(450_000),
            date(2026, 1, 30),
            false,
            BillCategory::Water,
        ),
        Bill::new(
            "Telkomsel Halo",
            "Telkomsel",
            "08123456789",
            Rupiah::from_units(850_000),
            date(2026, 1, 27),
            true,
            BillCategory::Phone,
        ),
        Bill::new(
            "IndiHome",
            "Telkom",
            "121234567890",
            Rupiah::from_units(750_000),
            date(2026, 1, 29),
            false,
            BillCategory::Internet,
        ),
    ]
}

/// Inbox notifications, newest first
pub fn notifications() -> Vec<Notification> {
    vec![
        Notification::new(
            "Transfer Berhasil",
            "Transfer Rp 520.000.000 ke PT Rajawali Indo Wisesa berhasil",
            date(2026, 1, 26),
            false,
            NotificationKind::Transaction,
        ),
        Notification::new(
            "Transfer Berhasil",
            "Transfer Rp 15.000.000 ke PT Maju Jaya berhasil",
            date(2026, 1, 25),
            false,
            NotificationKind::Transaction,
        ),
        Notification::new(
            "Promo Cashback",
            "Dapatkan cashback 10% untuk transaksi di Tokopedia",
            date(2026, 1, 24),
            false,
            NotificationKind::Promo,
        ),
        Notification::new(
            "Tagihan Jatuh Tempo",
            "Tagihan PLN Anda akan jatuh tempo dalam 3 hari",
            date(2026, 1, 23),
            true,
            NotificationKind::Info,
        ),
    ]
}

/// Saved transfer recipients
pub fn saved_contacts() -> Vec<Contact> {
    vec![
        Contact::new("Ahmad Fauzi", "BNI", "BNI", "0456789123"),
        Contact::new("Dewi Lestari", "BCA", "BCA", "7891234560"),
        Contact::new("Budi Santoso", "BRI", "BRI", "1234567890"),
        Contact::new("Siti Rahayu", "BNI", "BNI", "9876543210"),
        Contact::new("Eko Prasetyo", "BCA", "BCA", "5678901234"),
    ]
}

/// Recently used transfer recipients
pub fn recent_contacts() -> Vec<Contact> {
    vec![
        Contact::new("Rini Wulandari", "BRI", "BRI", "3456789012"),
        Contact::new("Hendra Gunawan", "BNI", "BNI", "6789012345"),
        Contact::new("Maya Putri", "BCA", "BCA", "2345678901"),
        Contact::new("Agus Setiawan", "BRI", "BRI", "8901234567"),
    ]
}

/// Destination bank directory
pub fn banks() -> Vec<Bank> {
    vec![
        Bank::new("Bank Negara Indonesia", "BNI"),
        Bank::new("Bank Central Asia", "BCA"),
        Bank::new("Bank Rakyat Indonesia", "BRI"),
        Bank::new("Bank Mandiri", "MANDIRI"),
        Bank::new("Bank CIMB Niaga", "CIMB"),
        Bank::new("Bank Danamon", "DANAMON"),
        Bank::new("Bank Permata", "PERMATA"),
        Bank::new("Bank OCBC NISP", "OCBC"),
        Bank::new("Bank Panin", "PANIN"),
        Bank::new("Bank Maybank", "MAYBANK"),
    ]
}

/// Six-month balance history for the home chart
pub fn balance_history() -> Vec<BalancePoint> {
    vec![
        BalancePoint::new("Aug", Rupiah::from_units(8_500_000_000)),
        BalancePoint::new("Sep", Rupiah::from_units(8_800_000_000)),
        BalancePoint::new("Oct", Rupiah::from_units(9_200_000_000)),
        BalancePoint::new("Nov", Rupiah::from_units(9_500_000_000)),
        BalancePoint::new("Dec", Rupiah::from_units(9_700_000_000)),
        BalancePoint::new("Jan", Rupiah::from_units(9_822_211_927)),
    ]
}
