use partnerdesk::domain::application::ApplicationStatus;
use partnerdesk::domain::partner::{NewLender, PartnerStatus};
use partnerdesk::domain::types::{AggregatorId, ApplicationId, Email, LenderId};
use partnerdesk::domain::user::{NewUser, UpdateProfile, UserRole};
use partnerdesk::listing::ListFilter;
use partnerdesk::repository::errors::RepositoryError;
use partnerdesk::repository::memory::MemoryRepository;
use partnerdesk::repository::{
    AggregatorReader, AnalyticsReader, ApplicationReader, ApplicationWriter, CommissionReader,
    LenderReader, LenderWriter, ListQuery, PartnerScope, PayoutReader, UserReader, UserWriter,
};

fn lender_scope(id: i32) -> PartnerScope {
    PartnerScope::Lender(LenderId::new(id).unwrap())
}

fn aggregator_scope(id: i32) -> PartnerScope {
    PartnerScope::Aggregator(AggregatorId::new(id).unwrap())
}

#[test]
fn test_application_listing_scopes_filters_and_pages() {
    let repo = MemoryRepository::new();

    let (total, all) = repo.list_applications(ListQuery::new()).unwrap();
    assert_eq!(total, 14);
    assert_eq!(all.len(), 14);

    let (lender_total, lender_rows) = repo
        .list_applications(ListQuery::new().scope(lender_scope(1)))
        .unwrap();
    assert_eq!(lender_total, 5);
    assert!(lender_rows.iter().all(|a| a.lender_id == 1));

    let (agg_total, agg_rows) = repo
        .list_applications(ListQuery::new().scope(aggregator_scope(1)))
        .unwrap();
    assert_eq!(agg_total, 7);
    assert!(agg_rows.iter().all(|a| a.aggregator_id == Some(1)));

    let (search_total, search_rows) = repo
        .list_applications(ListQuery::new().filter(ListFilter::new().search("raj")))
        .unwrap();
    assert_eq!(search_total, 3);
    let applicants: Vec<&str> = search_rows.iter().map(|a| a.applicant.as_str()).collect();
    assert_eq!(applicants, vec!["Rajesh Kumar", "Suraj Nair", "Rajiv Menon"]);

    let (pending_total, _) = repo
        .list_applications(ListQuery::new().filter(ListFilter::new().facet("status", "pending")))
        .unwrap();
    assert_eq!(pending_total, 6);

    // Scope applies before the filter, so a partner cannot widen visibility.
    let (scoped_pending_total, scoped_pending) = repo
        .list_applications(
            ListQuery::new()
                .scope(lender_scope(1))
                .filter(ListFilter::new().facet("status", "pending")),
        )
        .unwrap();
    assert_eq!(scoped_pending_total, 2);
    assert!(scoped_pending.iter().all(|a| a.lender_id == 1));

    let (page_total, first_page) = repo
        .list_applications(ListQuery::new().paginate(1, 10))
        .unwrap();
    assert_eq!(page_total, 14);
    assert_eq!(first_page.len(), 10);

    let (_, second_page) = repo
        .list_applications(ListQuery::new().paginate(2, 10))
        .unwrap();
    assert_eq!(second_page.len(), 4);
    assert_eq!(second_page[0].reference, "APL-2025-0011");
}

#[test]
fn test_application_status_updates_persist() {
    let repo = MemoryRepository::new();
    let id = ApplicationId::new(4).unwrap();

    let updated = repo
        .update_application_status(id, ApplicationStatus::Approved)
        .unwrap();
    assert_eq!(updated.status, ApplicationStatus::Approved);

    let stored = repo.get_application_by_id(id).unwrap().unwrap();
    assert_eq!(stored.status, ApplicationStatus::Approved);

    let missing = repo.update_application_status(
        ApplicationId::new(99).unwrap(),
        ApplicationStatus::Approved,
    );
    assert!(matches!(missing, Err(RepositoryError::NotFound)));
}

#[test]
fn test_lender_listing_scopes_and_filters() {
    let repo = MemoryRepository::new();

    let (total, _) = repo.list_lenders(ListQuery::new()).unwrap();
    assert_eq!(total, 5);

    let (own_total, own) = repo
        .list_lenders(ListQuery::new().scope(lender_scope(2)))
        .unwrap();
    assert_eq!(own_total, 1);
    assert_eq!(own[0].name, "BlueStone Capital");

    let (sourced_total, sourced) = repo
        .list_lenders(ListQuery::new().scope(aggregator_scope(1)))
        .unwrap();
    assert_eq!(sourced_total, 2);
    let names: Vec<&str> = sourced.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["Nimbus Finance", "Meridian Lending"]);

    let (active_total, _) = repo
        .list_lenders(ListQuery::new().filter(ListFilter::new().facet("status", "active")))
        .unwrap();
    assert_eq!(active_total, 3);

    let (code_total, code_rows) = repo
        .list_lenders(ListQuery::new().filter(ListFilter::new().search("LND-12")))
        .unwrap();
    assert_eq!(code_total, 2);
    assert_eq!(code_rows[0].code, "LND-1203");
    assert_eq!(code_rows[1].code, "LND-1275");
}

#[test]
fn test_create_lender_continues_sequences_and_links_aggregator() {
    let repo = MemoryRepository::new();
    let new_lender = NewLender::new(
        "Vistara Capital".to_string(),
        "desk@vistaracap.in".to_string(),
        "+919811122334".to_string(),
        "Delhi".to_string(),
        vec!["Personal Loan".to_string()],
        240,
        Some(2),
        None,
    )
    .unwrap();

    let created = repo.create_lender(&new_lender).unwrap();
    assert_eq!(created.id, 6);
    assert!(created.code.starts_with("LND-"));
    assert_eq!(created.status, PartnerStatus::Pending);
    assert_eq!(created.monthly_volume.paise(), 0);

    let stored = repo
        .get_lender_by_id(LenderId::new(6).unwrap())
        .unwrap()
        .unwrap();
    assert_eq!(stored.name, "Vistara Capital");

    let (_, aggregators) = repo.list_aggregators(ListQuery::new()).unwrap();
    let loansetu = aggregators.iter().find(|a| a.id == 2).unwrap();
    assert_eq!(loansetu.lender_count, 3);

    let codes_taken: Vec<String> = {
        let (_, lenders) = repo.list_lenders(ListQuery::new()).unwrap();
        lenders.into_iter().map(|l| l.code).collect()
    };
    assert_eq!(codes_taken.iter().filter(|c| **c == created.code).count(), 1);
}

#[test]
fn test_create_lender_rejects_unknown_aggregator() {
    let repo = MemoryRepository::new();
    let new_lender = NewLender::new(
        "Vistara Capital".to_string(),
        "desk@vistaracap.in".to_string(),
        "+919811122334".to_string(),
        "Delhi".to_string(),
        vec![],
        240,
        Some(99),
        None,
    )
    .unwrap();

    let result = repo.create_lender(&new_lender);
    match result {
        Err(RepositoryError::ConstraintViolation(message)) => {
            assert!(message.contains("unknown aggregator"));
        }
        other => panic!("expected constraint violation, got {other:?}"),
    }

    let (total, _) = repo.list_lenders(ListQuery::new()).unwrap();
    assert_eq!(total, 5);
}

#[test]
fn test_aggregator_listing_is_scoped_to_the_caller() {
    let repo = MemoryRepository::new();

    let (total, _) = repo.list_aggregators(ListQuery::new()).unwrap();
    assert_eq!(total, 3);

    let (own_total, own) = repo
        .list_aggregators(ListQuery::new().scope(aggregator_scope(2)))
        .unwrap();
    assert_eq!(own_total, 1);
    assert_eq!(own[0].name, "LoanSetu");

    let (none_total, _) = repo
        .list_aggregators(ListQuery::new().scope(lender_scope(1)))
        .unwrap();
    assert_eq!(none_total, 0);
}

#[test]
fn test_settlements_are_keyed_on_the_receiving_lender() {
    let repo = MemoryRepository::new();

    let (commission_total, _) = repo.list_commissions(ListQuery::new()).unwrap();
    assert_eq!(commission_total, 8);

    let (own_total, own) = repo
        .list_commissions(ListQuery::new().scope(lender_scope(1)))
        .unwrap();
    assert_eq!(own_total, 2);
    assert!(own.iter().all(|c| c.partner_id == 1));

    let (agg_total, _) = repo
        .list_commissions(ListQuery::new().scope(aggregator_scope(1)))
        .unwrap();
    assert_eq!(agg_total, 0);

    let (period_total, _) = repo
        .list_commissions(ListQuery::new().filter(ListFilter::new().facet("period", "2025-07")))
        .unwrap();
    assert_eq!(period_total, 4);

    let (payout_total, _) = repo.list_payouts(ListQuery::new()).unwrap();
    assert_eq!(payout_total, 6);

    let (neft_total, neft) = repo
        .list_payouts(ListQuery::new().filter(ListFilter::new().facet("method", "NEFT")))
        .unwrap();
    assert_eq!(neft_total, 3);
    assert!(neft.iter().all(|p| p.method.as_str() == "NEFT"));

    let (own_payouts_total, own_payouts) = repo
        .list_payouts(ListQuery::new().scope(lender_scope(2)))
        .unwrap();
    assert_eq!(own_payouts_total, 2);
    assert!(own_payouts.iter().all(|p| p.partner_id == 2));
}

#[test]
fn test_user_accounts_create_and_update() {
    let repo = MemoryRepository::new();

    let email = Email::new("priya@nimbusfinance.in").unwrap();
    let priya = repo.get_user_by_email(&email).unwrap().unwrap();
    assert_eq!(priya.role, UserRole::Lender);
    assert_eq!(priya.partner_id, Some(1));

    let unknown = Email::new("nobody@partnerdesk.in").unwrap();
    assert!(repo.get_user_by_email(&unknown).unwrap().is_none());

    let new_user = NewUser::new(
        "Rohit Bedi".to_string(),
        "rohit@finbridge.in".to_string(),
        UserRole::Aggregator,
        None,
    )
    .unwrap();
    let created = repo.create_user(&new_user).unwrap();
    assert_eq!(created.id, 4);
    assert!(created.phone.is_none());

    let duplicate = repo.create_user(
        &NewUser::new(
            "Another Priya".to_string(),
            "priya@nimbusfinance.in".to_string(),
            UserRole::Lender,
            None,
        )
        .unwrap(),
    );
    assert!(matches!(
        duplicate,
        Err(RepositoryError::ConstraintViolation(_))
    ));

    let updates = UpdateProfile::new(
        "Priya K".to_string(),
        Some("+91 98111 22334".to_string()),
    )
    .unwrap();
    let updated = repo.update_profile(&email, &updates).unwrap();
    assert_eq!(updated.name, "Priya K");
    assert_eq!(updated.phone.as_deref(), Some("+919811122334"));

    let missing = repo.update_profile(&unknown, &updates);
    assert!(matches!(missing, Err(RepositoryError::NotFound)));
}

#[test]
fn test_volume_series_sums_months_per_scope() {
    let repo = MemoryRepository::new();

    let all = repo.volume_series(PartnerScope::All).unwrap();
    assert_eq!(all.len(), 6);
    assert_eq!(all[0].month, "2025-03");
    assert_eq!(all[0].disbursed.paise(), 26_200_000 * 100);
    assert_eq!(all[0].applications, 24);
    assert_eq!(all[5].month, "2025-08");
    assert_eq!(all[5].disbursed.paise(), 18_100_000 * 100);

    let bluestone = repo.volume_series(lender_scope(2)).unwrap();
    assert_eq!(bluestone.len(), 6);
    assert_eq!(bluestone[5].disbursed.paise(), 8_200_000 * 100);
    assert_eq!(bluestone[5].applications, 4);

    let bharatloans = repo.volume_series(aggregator_scope(1)).unwrap();
    assert_eq!(bharatloans.len(), 6);
    assert_eq!(bharatloans[0].disbursed.paise(), 10_600_000 * 100);
    assert_eq!(bharatloans[0].applications, 13);
}
