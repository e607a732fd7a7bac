// ==========================================
// 排期推导规则测试
// ==========================================
// 职责: 验证 海上航行日 / 母港 / 赌场 / 优先级 规则及过滤顺序
// ==========================================

mod helpers;

use chrono::NaiveDate;
use deployment_scheduler::domain::types::{CasinoStatus, DeploymentType, Priority};
use deployment_scheduler::engine::{
    DateRange, DeriveError, DeriveRequest, PriorityRule, RowOutcome, ScheduleDeriver,
};
use helpers::test_data_builder::{table, VoyageBuilder};

fn request(ships: &[&str]) -> DeriveRequest {
    DeriveRequest {
        selected_ships: ships.iter().map(|s| s.to_string()).collect(),
        ..Default::default()
    }
}

// ==========================================
// 单行规则
// ==========================================

#[test]
fn test_home_port_call_is_scheduled_with_high_priority() {
    let voyages = table(vec![VoyageBuilder::new("Carnival Vista")
        .port("Miami")
        .home_port("Miami")
        .window("6")
        .build()]);

    let derivation = ScheduleDeriver::new()
        .derive(&voyages, &request(&["Carnival Vista"]))
        .unwrap();

    assert_eq!(derivation.entries.len(), 1);
    let entry = &derivation.entries[0];
    assert_eq!(entry.deployment_type, DeploymentType::HomePortDeployment);
    assert_eq!(entry.priority, Priority::High);
    assert_eq!(entry.deployment_date, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
}

#[test]
fn test_other_port_with_open_casino_is_excluded() {
    let voyages = table(vec![VoyageBuilder::new("Carnival Vista")
        .away("Nassau")
        .casino(CasinoStatus::Open)
        .build()]);

    let derivation = ScheduleDeriver::new()
        .derive(&voyages, &request(&["Carnival Vista"]))
        .unwrap();

    assert!(derivation.is_empty());
    assert_eq!(derivation.stats.skipped_casino_open, 1);
    assert_eq!(
        derivation.trace[0].outcome,
        RowOutcome::Skipped {
            deployment_type: DeploymentType::OtherPortCasinoOpenSkipped
        }
    );
}

#[test]
fn test_other_port_with_closed_casino_is_scheduled() {
    let voyages = table(vec![VoyageBuilder::new("Sky Princess")
        .away("Cozumel")
        .casino(CasinoStatus::Closed)
        .window("10")
        .build()]);

    let derivation = ScheduleDeriver::new()
        .derive(&voyages, &request(&["Sky Princess"]))
        .unwrap();

    assert_eq!(derivation.entries.len(), 1);
    assert_eq!(
        derivation.entries[0].deployment_type,
        DeploymentType::OtherPortCasinoClosed
    );
    assert_eq!(derivation.entries[0].priority, Priority::Low);
}

#[test]
fn test_sea_day_is_never_scheduled() {
    // 海上航行日即使港口等于母港也跳过
    let voyages = table(vec![
        VoyageBuilder::new("Costa Toscana").sea_day().build(),
        VoyageBuilder::new("Costa Toscana")
            .away("Nassau")
            .sea_day()
            .casino(CasinoStatus::Closed)
            .build(),
    ]);

    let derivation = ScheduleDeriver::new()
        .derive(&voyages, &request(&["Costa Toscana"]))
        .unwrap();

    assert!(derivation.is_empty());
    assert_eq!(derivation.stats.sea_days, 2);
    assert!(derivation
        .trace
        .iter()
        .all(|d| d.outcome == RowOutcome::SeaDay));
}

#[test]
fn test_home_port_ignores_casino_status() {
    let voyages = table(vec![
        VoyageBuilder::new("MS Eurodam").casino(CasinoStatus::Open).build(),
        VoyageBuilder::new("MS Eurodam").casino(CasinoStatus::Closed).march(2).build(),
        VoyageBuilder::new("MS Eurodam")
            .casino(CasinoStatus::NotApplicable)
            .march(3)
            .build(),
    ]);

    let derivation = ScheduleDeriver::new()
        .derive(&voyages, &request(&["MS Eurodam"]))
        .unwrap();

    assert_eq!(derivation.entries.len(), 3);
    assert!(derivation
        .entries
        .iter()
        .all(|e| e.deployment_type == DeploymentType::HomePortDeployment));
}

// ==========================================
// 优先级
// ==========================================

#[test]
fn test_priority_is_recomputed_from_window() {
    let cases = [
        ("0", Priority::High),
        ("6", Priority::High),
        ("7", Priority::Medium),
        ("8", Priority::Medium),
        ("9", Priority::Low),
        ("12", Priority::Low),
    ];

    let records = cases
        .iter()
        .enumerate()
        .map(|(i, (window, _))| {
            VoyageBuilder::new("Regal Princess")
                .window(window)
                .priority(Priority::High)
                .march(i as u32 + 1)
                .build()
        })
        .collect();

    let derivation = ScheduleDeriver::new()
        .derive(&table(records), &request(&["Regal Princess"]))
        .unwrap();

    let got: Vec<Priority> = derivation.entries.iter().map(|e| e.priority).collect();
    let expected: Vec<Priority> = cases.iter().map(|(_, p)| *p).collect();
    assert_eq!(got, expected);
}

#[test]
fn test_stored_priority_is_ignored() {
    for stored in Priority::ALL {
        let voyages = table(vec![VoyageBuilder::new("Carnival Dream")
            .window("8")
            .priority(stored)
            .build()]);
        let derivation = ScheduleDeriver::new()
            .derive(&voyages, &request(&["Carnival Dream"]))
            .unwrap();
        assert_eq!(derivation.entries[0].priority, Priority::Medium);
    }
}

#[test]
fn test_priority_rule_thresholds() {
    assert_eq!(PriorityRule::for_window_hours(-2), Priority::High);
    assert_eq!(PriorityRule::for_window_hours(6), Priority::High);
    assert_eq!(PriorityRule::for_window_hours(8), Priority::Medium);
    assert_eq!(PriorityRule::for_window_hours(9), Priority::Low);
    assert_eq!(PriorityRule::parse_window(" 7 ").unwrap(), 7);
    assert!(PriorityRule::parse_window("6.5").is_err());
}

#[test]
fn test_non_numeric_window_fails_whole_derivation() {
    let voyages = table(vec![
        VoyageBuilder::new("Seabourn Quest").window("6").build(),
        VoyageBuilder::new("Seabourn Quest").window("six").march(2).build(),
    ]);

    let err = ScheduleDeriver::new()
        .derive(&voyages, &request(&["Seabourn Quest"]))
        .unwrap_err();

    assert_eq!(
        err,
        DeriveError::InvalidDeploymentWindow {
            row: 1,
            ship: "Seabourn Quest".to_string(),
            value: "six".to_string(),
        }
    );
}

#[test]
fn test_oversized_window_is_low_priority() {
    let voyages = table(vec![VoyageBuilder::new("Seabourn Quest")
        .window("99999999999999999999")
        .build()]);

    let derivation = ScheduleDeriver::new()
        .derive(&voyages, &request(&["Seabourn Quest"]))
        .unwrap();
    assert_eq!(derivation.entries[0].priority, Priority::Low);
    assert_eq!(derivation.entries[0].deployment_window, "99999999999999999999");
}

#[test]
fn test_bad_window_on_unscheduled_row_is_not_an_error() {
    let voyages = table(vec![
        VoyageBuilder::new("Seabourn Quest").window("n/a").sea_day().build(),
        VoyageBuilder::new("Seabourn Quest")
            .away("Nassau")
            .casino(CasinoStatus::Open)
            .window("")
            .march(2)
            .build(),
    ]);

    let derivation = ScheduleDeriver::new()
        .derive(&voyages, &request(&["Seabourn Quest"]))
        .unwrap();
    assert!(derivation.is_empty());
}

// ==========================================
// 过滤与顺序
// ==========================================

#[test]
fn test_unselected_ships_are_filtered_out() {
    let voyages = table(vec![
        VoyageBuilder::new("Carnival Vista").build(),
        VoyageBuilder::new("Sky Princess").build(),
        VoyageBuilder::new("Carnival Vista").march(2).build(),
    ]);

    let derivation = ScheduleDeriver::new()
        .derive(&voyages, &request(&["Carnival Vista"]))
        .unwrap();

    assert_eq!(derivation.stats.total_rows, 3);
    assert_eq!(derivation.stats.ship_matched, 2);
    assert!(derivation
        .entries
        .iter()
        .all(|e| e.ship_name == "Carnival Vista"));
}

#[test]
fn test_home_ports_only_drops_other_ports() {
    let voyages = table(vec![
        VoyageBuilder::new("Costa Diadema").build(),
        VoyageBuilder::new("Costa Diadema")
            .away("Nassau")
            .casino(CasinoStatus::Closed)
            .march(2)
            .build(),
    ]);

    let mut req = request(&["Costa Diadema"]);
    let all = ScheduleDeriver::new().derive(&voyages, &req).unwrap();
    assert_eq!(all.entries.len(), 2);

    req.home_ports_only = true;
    let home_only = ScheduleDeriver::new().derive(&voyages, &req).unwrap();
    assert_eq!(home_only.entries.len(), 1);
    assert_eq!(home_only.stats.home_port_matched, 1);
    assert_eq!(
        home_only.entries[0].deployment_type,
        DeploymentType::HomePortDeployment
    );
}

#[test]
fn test_output_preserves_input_order() {
    let voyages = table(vec![
        VoyageBuilder::new("Carnival Breeze").march(5).build(),
        VoyageBuilder::new("Carnival Horizon").march(1).build(),
        VoyageBuilder::new("Carnival Breeze").march(3).build(),
    ]);

    let derivation = ScheduleDeriver::new()
        .derive(&voyages, &request(&["Carnival Breeze", "Carnival Horizon"]))
        .unwrap();

    let days: Vec<u32> = derivation
        .entries
        .iter()
        .map(|e| chrono::Datelike::day(&e.deployment_date))
        .collect();
    assert_eq!(days, vec![5, 1, 3]);
}

#[test]
fn test_date_range_is_inclusive() {
    let voyages = table(
        (1..=10)
            .map(|d| VoyageBuilder::new("Sky Princess").march(d).build())
            .collect(),
    );
    let mut req = request(&["Sky Princess"]);
    req.date_range = Some(DateRange {
        start: NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
        end: NaiveDate::from_ymd_opt(2025, 3, 5).unwrap(),
    });

    let derivation = ScheduleDeriver::new().derive(&voyages, &req).unwrap();
    assert_eq!(derivation.entries.len(), 3);
    assert_eq!(derivation.stats.date_matched, 3);
}

#[test]
fn test_inverted_date_range_is_rejected() {
    let voyages = table(vec![VoyageBuilder::new("Sky Princess").build()]);
    let mut req = request(&["Sky Princess"]);
    req.date_range = Some(DateRange {
        start: NaiveDate::from_ymd_opt(2025, 3, 5).unwrap(),
        end: NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
    });

    let err = ScheduleDeriver::new().derive(&voyages, &req).unwrap_err();
    assert!(matches!(err, DeriveError::InvalidDateRange { .. }));
}

#[test]
fn test_empty_selection_reports_no_selection() {
    let voyages = table(vec![VoyageBuilder::new("Sky Princess").build()]);
    let err = ScheduleDeriver::new()
        .derive(&voyages, &DeriveRequest::default())
        .unwrap_err();
    assert_eq!(err, DeriveError::NoSelection);
}

// ==========================================
// 样例数据上的整体性质
// ==========================================

#[test]
fn test_seeded_dataset_invariants() {
    let voyages = test_helpers::seeded_table(200).unwrap();
    let ships: Vec<&str> = voyages.records().iter().map(|r| r.ship_name.as_str()).collect();
    let derivation = ScheduleDeriver::new().derive(&voyages, &request(&ships)).unwrap();

    let stats = &derivation.stats;
    assert_eq!(stats.ship_matched, 200);
    assert_eq!(
        stats.sea_days + stats.skipped_casino_open + stats.scheduled,
        stats.home_port_matched
    );

    for entry in &derivation.entries {
        let hours = PriorityRule::parse_window(&entry.deployment_window).unwrap();
        assert_eq!(entry.priority, PriorityRule::for_window_hours(hours));
    }
    for (decision, record) in derivation
        .trace
        .iter()
        .map(|d| (d, &voyages.records()[d.row]))
    {
        if record.is_sea_day {
            assert_eq!(decision.outcome, RowOutcome::SeaDay);
        }
    }
}
