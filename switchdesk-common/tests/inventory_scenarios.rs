//! End-to-end walks through the inventory table state machine

use chrono::{Duration, TimeZone, Utc};
use switchdesk_common::{
    Action, DraftField, InventoryState, MutationOutcome, MutationRequest, PageSize, Phase,
    RequestFailed, SwitchDraft, SwitchId, SwitchRecord,
};

fn fleet(count: usize) -> Vec<SwitchRecord> {
    let base = Utc.with_ymd_and_hms(2024, 6, 1, 7, 0, 0).unwrap();
    (1..=count)
        .map(|n| SwitchRecord {
            id: SwitchId(format!("66a0{:020x}", n)),
            wifi_name: if n % 5 == 0 { "Office-Guest".to_string() } else { format!("Plant-{}", n) },
            switch_location: format!("Hall {}", n % 4),
            switch_name: format!("sw-hall-{:02}", n),
            switch_port: (n % 3 == 0).then(|| format!("Gi1/0/{}", n)),
            switch_ip_address: format!("172.16.{}.{}", n / 256, n % 256),
            created_at: base + Duration::minutes(n as i64),
            updated_at: base + Duration::minutes(n as i64),
        })
        .collect()
}

/// Stand-in for the backend answering a request successfully
fn acknowledge(request: &MutationRequest, next_id: usize) -> MutationOutcome {
    let stamp = Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap();
    let materialize = |id: SwitchId, draft: &SwitchDraft| SwitchRecord {
        id,
        wifi_name: draft.wifi_name.clone(),
        switch_location: draft.switch_location.clone(),
        switch_name: draft.switch_name.clone(),
        switch_port: Some(draft.switch_port.clone()),
        switch_ip_address: draft.switch_ip_address.clone(),
        created_at: stamp,
        updated_at: stamp,
    };

    match request {
        MutationRequest::Create(draft) => {
            MutationOutcome::Created(materialize(SwitchId(format!("new-{}", next_id)), draft))
        }
        MutationRequest::Update(id, draft) => MutationOutcome::Updated {
            id: id.clone(),
            record: materialize(id.clone(), draft),
        },
        MutationRequest::Delete(id) => MutationOutcome::Deleted(id.clone()),
    }
}

fn fill(state: InventoryState, draft: &SwitchDraft) -> InventoryState {
    DraftField::ALL.into_iter().fold(state, |state, field| {
        state.reduce(Action::FieldChanged(field, draft.get(field).to_string()))
    })
}

#[test]
fn browse_search_and_page() {
    let state = InventoryState::default().reduce(Action::Loaded(Ok(fleet(25))));

    let first = state.view();
    assert_eq!(first.rows.len(), 10);
    assert_eq!(first.rows[0].ordinal, 1);
    assert_eq!(first.page_count, Some(3));

    let third = state.reduce(Action::PageChanged(3));
    let view = third.view();
    assert_eq!(view.rows.len(), 5);
    assert_eq!(view.rows[4].record.switch_name, "sw-hall-25");

    assert!(state.reduce(Action::PageChanged(4)).view().rows.is_empty());

    // five records carry the "Office-Guest" SSID
    let searched = third.reduce(Action::SearchChanged("OFFICE".to_string()));
    assert_eq!(searched.page(), 1);
    let view = searched.view();
    assert_eq!(view.matched, 5);
    assert_eq!(view.page_count, Some(1));
    assert!(view
        .rows
        .iter()
        .all(|row| row.record.wifi_name == "Office-Guest"));
}

#[test]
fn all_rows_mode() {
    let state = InventoryState::default()
        .reduce(Action::Loaded(Ok(fleet(140))))
        .reduce(Action::PageChanged(2))
        .reduce(Action::PageSizeChanged("all".parse::<PageSize>().unwrap()));

    let view = state.view();
    assert_eq!(state.page(), 1);
    assert_eq!(view.rows.len(), 140);
    assert_eq!(view.rows[139].ordinal, 140);
    assert_eq!(view.page_count, None);
}

#[test]
fn create_edit_delete_cycle() {
    let mut state = InventoryState::default().reduce(Action::Loaded(Ok(fleet(12))));

    let draft = SwitchDraft {
        wifi_name: "Dock".to_string(),
        switch_location: "Loading bay".to_string(),
        switch_name: "sw-dock-01".to_string(),
        switch_port: String::new(),
        switch_ip_address: "172.16.9.1".to_string(),
    };
    state = fill(state, &draft);

    let (issued, create) = state.submit();
    let completion = create.complete(Ok(acknowledge(&create.request, 1)));
    state = issued.reconcile(completion);
    assert_eq!(state.records().len(), 13);
    assert_eq!(state.records()[12].switch_name, "sw-dock-01");
    assert_eq!(state.form().draft, SwitchDraft::default());

    let target = state.records()[4].id.clone();
    let untouched: Vec<SwitchRecord> = state
        .records()
        .iter()
        .filter(|r| r.id != target)
        .cloned()
        .collect();
    state = state
        .reduce(Action::EditRequested(target.clone()))
        .reduce(Action::FieldChanged(DraftField::SwitchLocation, "Hall 9".to_string()));
    let (issued, update) = state.submit();
    state = issued.reconcile(update.complete(Ok(acknowledge(&update.request, 2))));

    let edited = state.records().iter().find(|r| r.id == target).unwrap();
    assert_eq!(edited.switch_location, "Hall 9");
    let others: Vec<SwitchRecord> = state
        .records()
        .iter()
        .filter(|r| r.id != target)
        .cloned()
        .collect();
    assert_eq!(others, untouched);
    assert!(!state.form().is_editing());

    let (issued, delete) = state.delete(target.clone());
    state = issued.reconcile(delete.complete(Ok(acknowledge(&delete.request, 3))));
    assert_eq!(state.records().len(), 12);
    assert!(state.records().iter().all(|r| r.id != target));
    assert_eq!(state.phase(), &Phase::Ready);
}

#[test]
fn failed_delete_leaves_record_visible() {
    let state = InventoryState::default().reduce(Action::Loaded(Ok(fleet(3))));
    let victim = state.records()[1].id.clone();

    let (issued, delete) = state.delete(victim.clone());
    let state = issued.reconcile(delete.complete(Err(RequestFailed::status(404))));

    assert!(state.records().iter().any(|r| r.id == victim));
    assert_eq!(state.phase(), &Phase::Failed(RequestFailed::status(404)));
}
