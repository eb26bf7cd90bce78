//! Prints a summary of the seeded dataset and walks the application list
//! the way an embedding UI would, page by page.

use partnerdesk::domain::application::{ApplicationStatus, LoanApplication};
use partnerdesk::listing::view::ListView;
use partnerdesk::listing::{DEFAULT_PAGE_SIZE, ListFilter};
use partnerdesk::repository::memory::MemoryRepository;
use partnerdesk::repository::{
    AggregatorReader, AnalyticsReader, ApplicationReader, CommissionReader, LenderReader,
    ListQuery, PartnerScope, PayoutReader,
};

fn print_status_breakdown(applications: &[LoanApplication]) {
    for status in ApplicationStatus::ALL {
        let count = applications.iter().filter(|a| a.status == status).count();
        println!("  {:<14} {count}", status.label());
    }
}

fn walk_pages(applications: Vec<LoanApplication>) {
    let per_page = DEFAULT_PAGE_SIZE / 2;
    let mut view = ListView::with_page_size(applications, per_page);
    view.set_filter(ListFilter::new().facet("status", "pending"));

    println!("\nPending applications, {per_page} per page:");
    loop {
        let rows = view.visible();
        if rows.is_empty() {
            break;
        }
        println!("  page {} ({} matching)", view.page(), view.total());
        for row in rows {
            println!("    {} {} ({})", row.reference, row.applicant, row.lender);
        }

        let ticket = view.request_page(view.page() + 1);
        assert!(view.is_loading());
        // The in-memory walk completes every request synchronously.
        view.complete(ticket);
    }
}

fn main() {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let repo = MemoryRepository::new();
    let query = ListQuery::new().scope(PartnerScope::All);

    let (lenders, _) = repo
        .list_lenders(query.clone())
        .expect("lenders available");
    let (aggregators, _) = repo
        .list_aggregators(query.clone())
        .expect("aggregators available");
    let (_, applications) = repo
        .list_applications(query.clone())
        .expect("applications available");
    let (commissions, _) = repo
        .list_commissions(query.clone())
        .expect("commissions available");
    let (payouts, _) = repo.list_payouts(query).expect("payouts available");

    println!("Seeded dataset:");
    println!("  {lenders} lenders, {aggregators} aggregators");
    println!(
        "  {} applications, {commissions} commission entries, {payouts} payouts",
        applications.len()
    );

    println!("\nApplications by status:");
    print_status_breakdown(&applications);

    println!("\nMonthly disbursal volume:");
    let series = repo
        .volume_series(PartnerScope::All)
        .expect("volume series available");
    for point in series {
        println!(
            "  {}  {:>14}  {:>3} applications",
            point.month, point.disbursed, point.applications
        );
    }

    walk_pages(applications);
}
