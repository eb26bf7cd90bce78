//! Demo dataset the server boots with.
//!
//! Everything is hard-coded so screens and tests see the same records on
//! every start. Ids are assigned here; the repository continues the
//! sequences when records are added at runtime.

use chrono::NaiveDate;
use uuid::uuid;

use crate::domain::analytics::MonthlyVolume;
use crate::domain::application::{ApplicationStatus, LoanApplication};
use crate::domain::commission::{CommissionEntry, CommissionStatus};
use crate::domain::partner::{Aggregator, Lender, PartnerStatus};
use crate::domain::payout::{Payout, PayoutMethod, PayoutStatus};
use crate::domain::types::Money;
use crate::domain::user::{DashboardUser, UserRole};
use crate::repository::memory::Dataset;

const NIMBUS: (i32, &str) = (1, "Nimbus Finance");
const BLUESTONE: (i32, &str) = (2, "BlueStone Capital");
const SARVODAYA: (i32, &str) = (3, "Sarvodaya Credit");
const MERIDIAN: (i32, &str) = (4, "Meridian Lending");
const KALPAVRIKSHA: (i32, &str) = (5, "Kalpavriksha Finance");

const BHARATLOANS: (i32, &str) = (1, "BharatLoans");
const LOANSETU: (i32, &str) = (2, "LoanSetu");

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn lender(
    (id, name): (i32, &str),
    code: &str,
    contact_email: &str,
    contact_phone: &str,
    city: &str,
    products: &[&str],
    commission_bps: i32,
    status: PartnerStatus,
    monthly_volume_rupees: i64,
    aggregator_id: Option<i32>,
    onboarded_at: NaiveDate,
) -> Lender {
    Lender {
        id,
        name: name.to_string(),
        code: code.to_string(),
        contact_email: contact_email.to_string(),
        contact_phone: contact_phone.to_string(),
        city: city.to_string(),
        products: products.iter().map(ToString::to_string).collect(),
        commission_bps,
        status,
        monthly_volume: Money::from_rupees(monthly_volume_rupees),
        aggregator_id,
        onboarded_at,
        notes: None,
    }
}

fn aggregator(
    (id, name): (i32, &str),
    code: &str,
    contact_email: &str,
    contact_phone: &str,
    city: &str,
    lender_count: u32,
    monthly_volume_rupees: i64,
    status: PartnerStatus,
    onboarded_at: NaiveDate,
) -> Aggregator {
    Aggregator {
        id,
        name: name.to_string(),
        code: code.to_string(),
        contact_email: contact_email.to_string(),
        contact_phone: contact_phone.to_string(),
        city: city.to_string(),
        lender_count,
        monthly_volume: Money::from_rupees(monthly_volume_rupees),
        status,
        onboarded_at,
    }
}

fn application(
    id: i32,
    reference: &str,
    applicant: &str,
    product: &str,
    amount_rupees: i64,
    (lender_id, lender): (i32, &str),
    aggregator: Option<(i32, &str)>,
    status: ApplicationStatus,
    submitted_at: NaiveDate,
) -> LoanApplication {
    LoanApplication {
        id,
        reference: reference.to_string(),
        applicant: applicant.to_string(),
        product: product.to_string(),
        amount: Money::from_rupees(amount_rupees),
        lender_id,
        lender: lender.to_string(),
        aggregator_id: aggregator.map(|(id, _)| id),
        aggregator: aggregator.map(|(_, name)| name.to_string()),
        status,
        submitted_at,
    }
}

fn commission(
    id: i32,
    (partner_id, partner): (i32, &str),
    period: &str,
    volume_rupees: i64,
    rate_bps: i32,
    amount_rupees: i64,
    status: CommissionStatus,
) -> CommissionEntry {
    CommissionEntry {
        id,
        partner_id,
        partner: partner.to_string(),
        period: period.to_string(),
        loan_volume: Money::from_rupees(volume_rupees),
        rate_bps,
        amount: Money::from_rupees(amount_rupees),
        status,
    }
}

fn payout(
    id: i32,
    (partner_id, partner): (i32, &str),
    amount_rupees: i64,
    method: PayoutMethod,
    reference: &str,
    scheduled_for: NaiveDate,
    status: PayoutStatus,
) -> Payout {
    Payout {
        id,
        partner_id,
        partner: partner.to_string(),
        amount: Money::from_rupees(amount_rupees),
        method,
        reference: reference.to_string(),
        scheduled_for,
        status,
    }
}

fn volume(
    lender_id: i32,
    aggregator_id: Option<i32>,
    month: &str,
    rupees: i64,
    applications: u32,
) -> MonthlyVolume {
    MonthlyVolume {
        lender_id: Some(lender_id),
        aggregator_id,
        month: month.to_string(),
        disbursed: Money::from_rupees(rupees),
        applications,
    }
}

pub fn dataset() -> Dataset {
    let lenders = vec![
        lender(
            NIMBUS,
            "LND-1042",
            "contact@nimbusfinance.in",
            "+919820012345",
            "Mumbai",
            &["Personal Loan", "Business Loan"],
            250,
            PartnerStatus::Active,
            11_200_000,
            Some(BHARATLOANS.0),
            date(2023, 4, 12),
        ),
        lender(
            BLUESTONE,
            "LND-1187",
            "hello@bluestonecap.in",
            "+918041523377",
            "Bengaluru",
            &["Home Loan", "Loan Against Property"],
            180,
            PartnerStatus::Active,
            12_400_000,
            None,
            date(2023, 7, 3),
        ),
        lender(
            SARVODAYA,
            "LND-1203",
            "support@sarvodayacredit.in",
            "+912025521190",
            "Pune",
            &["Gold Loan"],
            310,
            PartnerStatus::Pending,
            1_500_000,
            Some(LOANSETU.0),
            date(2025, 5, 21),
        ),
        lender(
            MERIDIAN,
            "LND-1275",
            "desk@meridianlending.in",
            "+914428153060",
            "Chennai",
            &["Vehicle Loan", "Personal Loan"],
            220,
            PartnerStatus::Inactive,
            2_100_000,
            Some(BHARATLOANS.0),
            date(2022, 11, 15),
        ),
        lender(
            KALPAVRIKSHA,
            "LND-1349",
            "care@kalpavriksha.in",
            "+911412974408",
            "Jaipur",
            &["Personal Loan"],
            275,
            PartnerStatus::Active,
            4_100_000,
            Some(LOANSETU.0),
            date(2024, 2, 9),
        ),
    ];

    let aggregators = vec![
        aggregator(
            BHARATLOANS,
            "AGG-2007",
            "partners@bharatloans.in",
            "+911140852200",
            "Delhi",
            2,
            13_300_000,
            PartnerStatus::Active,
            date(2022, 8, 1),
        ),
        aggregator(
            LOANSETU,
            "AGG-2113",
            "team@loansetu.in",
            "+914066384511",
            "Hyderabad",
            2,
            5_600_000,
            PartnerStatus::Active,
            date(2023, 1, 18),
        ),
        aggregator(
            (3, "FinBridge Network"),
            "AGG-2240",
            "connect@finbridge.in",
            "+913340251677",
            "Kolkata",
            0,
            0,
            PartnerStatus::Pending,
            date(2025, 6, 30),
        ),
    ];

    let applications = vec![
        application(
            1,
            "APL-2025-0001",
            "Rajesh Kumar",
            "Personal Loan",
            350_000,
            NIMBUS,
            Some(BHARATLOANS),
            ApplicationStatus::Disbursed,
            date(2025, 6, 14),
        ),
        application(
            2,
            "APL-2025-0002",
            "Priya Sharma",
            "Home Loan",
            8_500_000,
            BLUESTONE,
            None,
            ApplicationStatus::Approved,
            date(2025, 6, 18),
        ),
        application(
            3,
            "APL-2025-0003",
            "Amit Patel",
            "Business Loan",
            1_200_000,
            NIMBUS,
            Some(BHARATLOANS),
            ApplicationStatus::UnderReview,
            date(2025, 7, 2),
        ),
        application(
            4,
            "APL-2025-0004",
            "Sunita Reddy",
            "Gold Loan",
            250_000,
            SARVODAYA,
            Some(LOANSETU),
            ApplicationStatus::Pending,
            date(2025, 7, 8),
        ),
        application(
            5,
            "APL-2025-0005",
            "Vikram Singh",
            "Vehicle Loan",
            650_000,
            MERIDIAN,
            Some(BHARATLOANS),
            ApplicationStatus::Rejected,
            date(2025, 7, 11),
        ),
        application(
            6,
            "APL-2025-0006",
            "Anjali Mehta",
            "Personal Loan",
            475_000,
            KALPAVRIKSHA,
            Some(LOANSETU),
            ApplicationStatus::Approved,
            date(2025, 7, 15),
        ),
        application(
            7,
            "APL-2025-0007",
            "Suraj Nair",
            "Personal Loan",
            300_000,
            NIMBUS,
            Some(BHARATLOANS),
            ApplicationStatus::Pending,
            date(2025, 7, 19),
        ),
        application(
            8,
            "APL-2025-0008",
            "Kavita Joshi",
            "Home Loan",
            6_200_000,
            BLUESTONE,
            None,
            ApplicationStatus::UnderReview,
            date(2025, 7, 22),
        ),
        application(
            9,
            "APL-2025-0009",
            "Rajiv Menon",
            "Business Loan",
            2_500_000,
            NIMBUS,
            Some(BHARATLOANS),
            ApplicationStatus::Approved,
            date(2025, 7, 28),
        ),
        application(
            10,
            "APL-2025-0010",
            "Deepa Iyer",
            "Gold Loan",
            180_000,
            SARVODAYA,
            Some(LOANSETU),
            ApplicationStatus::Pending,
            date(2025, 8, 1),
        ),
        application(
            11,
            "APL-2025-0011",
            "Mohammed Ansari",
            "Vehicle Loan",
            720_000,
            MERIDIAN,
            Some(BHARATLOANS),
            ApplicationStatus::Pending,
            date(2025, 8, 5),
        ),
        application(
            12,
            "APL-2025-0012",
            "Neha Gupta",
            "Personal Loan",
            400_000,
            KALPAVRIKSHA,
            Some(LOANSETU),
            ApplicationStatus::UnderReview,
            date(2025, 8, 9),
        ),
        application(
            13,
            "APL-2025-0013",
            "Arun Bhatt",
            "Personal Loan",
            525_000,
            NIMBUS,
            Some(BHARATLOANS),
            ApplicationStatus::Pending,
            date(2025, 8, 12),
        ),
        application(
            14,
            "APL-2025-0014",
            "Lakshmi Pillai",
            "Home Loan",
            9_100_000,
            BLUESTONE,
            None,
            ApplicationStatus::Pending,
            date(2025, 8, 18),
        ),
    ];

    let commissions = vec![
        commission(
            1,
            NIMBUS,
            "2025-06",
            9_500_000,
            250,
            237_500,
            CommissionStatus::Paid,
        ),
        commission(
            2,
            BLUESTONE,
            "2025-06",
            14_700_000,
            180,
            264_600,
            CommissionStatus::Paid,
        ),
        commission(
            3,
            MERIDIAN,
            "2025-06",
            2_100_000,
            220,
            46_200,
            CommissionStatus::Paid,
        ),
        commission(
            4,
            KALPAVRIKSHA,
            "2025-06",
            3_800_000,
            275,
            104_500,
            CommissionStatus::Approved,
        ),
        commission(
            5,
            NIMBUS,
            "2025-07",
            11_200_000,
            250,
            280_000,
            CommissionStatus::Approved,
        ),
        commission(
            6,
            BLUESTONE,
            "2025-07",
            12_400_000,
            180,
            223_200,
            CommissionStatus::Pending,
        ),
        commission(
            7,
            SARVODAYA,
            "2025-07",
            1_500_000,
            310,
            46_500,
            CommissionStatus::Pending,
        ),
        commission(
            8,
            KALPAVRIKSHA,
            "2025-07",
            4_100_000,
            275,
            112_750,
            CommissionStatus::Pending,
        ),
    ];

    let payouts = vec![
        payout(
            1,
            NIMBUS,
            237_500,
            PayoutMethod::Neft,
            "UTR520861100234",
            date(2025, 7, 5),
            PayoutStatus::Completed,
        ),
        payout(
            2,
            BLUESTONE,
            264_600,
            PayoutMethod::Neft,
            "UTR520861100391",
            date(2025, 7, 5),
            PayoutStatus::Completed,
        ),
        payout(
            3,
            MERIDIAN,
            46_200,
            PayoutMethod::Imps,
            "UTR520861100412",
            date(2025, 7, 6),
            PayoutStatus::Completed,
        ),
        payout(
            4,
            KALPAVRIKSHA,
            104_500,
            PayoutMethod::Upi,
            "UTR520861247118",
            date(2025, 8, 4),
            PayoutStatus::Processing,
        ),
        payout(
            5,
            NIMBUS,
            280_000,
            PayoutMethod::Neft,
            "UTR520861247301",
            date(2025, 8, 5),
            PayoutStatus::Processing,
        ),
        payout(
            6,
            BLUESTONE,
            223_200,
            PayoutMethod::Imps,
            "UTR520861247422",
            date(2025, 8, 7),
            PayoutStatus::Scheduled,
        ),
    ];

    let users = vec![
        DashboardUser {
            id: 1,
            uid: uuid!("a81f5be2-3c64-4be0-9f99-3f1c0b6e51aa"),
            name: "Asha Verma".to_string(),
            email: "admin@partnerdesk.in".to_string(),
            phone: Some("+919810011223".to_string()),
            role: UserRole::SuperAdmin,
            partner_id: None,
            joined_at: date(2022, 7, 15),
        },
        DashboardUser {
            id: 2,
            uid: uuid!("c2f6a2de-71e5-4f9b-8f62-90f5f3d1a7b4"),
            name: "Priya Krishnan".to_string(),
            email: "priya@nimbusfinance.in".to_string(),
            phone: Some("+919820012345".to_string()),
            role: UserRole::Lender,
            partner_id: Some(NIMBUS.0),
            joined_at: date(2023, 4, 20),
        },
        DashboardUser {
            id: 3,
            uid: uuid!("e94d27b3-55a8-4c21-b6ff-0d8f1e2a9c37"),
            name: "Arjun Malhotra".to_string(),
            email: "arjun@bharatloans.in".to_string(),
            phone: None,
            role: UserRole::Aggregator,
            partner_id: Some(BHARATLOANS.0),
            joined_at: date(2022, 9, 2),
        },
    ];

    let volumes = vec![
        volume(NIMBUS.0, Some(BHARATLOANS.0), "2025-03", 7_800_000, 9),
        volume(NIMBUS.0, Some(BHARATLOANS.0), "2025-04", 8_400_000, 11),
        volume(NIMBUS.0, Some(BHARATLOANS.0), "2025-05", 9_100_000, 10),
        volume(NIMBUS.0, Some(BHARATLOANS.0), "2025-06", 9_500_000, 12),
        volume(NIMBUS.0, Some(BHARATLOANS.0), "2025-07", 11_200_000, 14),
        volume(NIMBUS.0, Some(BHARATLOANS.0), "2025-08", 6_300_000, 7),
        volume(BLUESTONE.0, None, "2025-03", 12_500_000, 6),
        volume(BLUESTONE.0, None, "2025-04", 11_900_000, 5),
        volume(BLUESTONE.0, None, "2025-05", 13_800_000, 7),
        volume(BLUESTONE.0, None, "2025-06", 14_700_000, 8),
        volume(BLUESTONE.0, None, "2025-07", 12_400_000, 6),
        volume(BLUESTONE.0, None, "2025-08", 8_200_000, 4),
        volume(SARVODAYA.0, Some(LOANSETU.0), "2025-07", 1_500_000, 3),
        volume(SARVODAYA.0, Some(LOANSETU.0), "2025-08", 900_000, 2),
        volume(MERIDIAN.0, Some(BHARATLOANS.0), "2025-03", 2_800_000, 4),
        volume(MERIDIAN.0, Some(BHARATLOANS.0), "2025-04", 2_400_000, 3),
        volume(MERIDIAN.0, Some(BHARATLOANS.0), "2025-05", 2_200_000, 3),
        volume(MERIDIAN.0, Some(BHARATLOANS.0), "2025-06", 2_100_000, 3),
        volume(KALPAVRIKSHA.0, Some(LOANSETU.0), "2025-03", 3_100_000, 5),
        volume(KALPAVRIKSHA.0, Some(LOANSETU.0), "2025-04", 3_400_000, 6),
        volume(KALPAVRIKSHA.0, Some(LOANSETU.0), "2025-05", 3_600_000, 5),
        volume(KALPAVRIKSHA.0, Some(LOANSETU.0), "2025-06", 3_800_000, 6),
        volume(KALPAVRIKSHA.0, Some(LOANSETU.0), "2025-07", 4_100_000, 7),
        volume(KALPAVRIKSHA.0, Some(LOANSETU.0), "2025-08", 2_700_000, 4),
    ];

    Dataset {
        lenders,
        aggregators,
        applications,
        commissions,
        payouts,
        users,
        volumes,
    }
}
