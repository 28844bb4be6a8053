use contracts::domain::a002_locker_grid::GridCell;
use contracts::domain::a003_locker_selection::LoadState;
use contracts::domain::a004_holder::AssignmentResult;
use leptos::prelude::*;

use super::view_model::AssignLockerViewModel;
use crate::domain::a004_holder::store::use_holder_forms;
use crate::shared::components::ui::Select;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;

#[component]
pub fn AssignLockerModal(
    /// Locker center to load (None renders the error state)
    center_id: Option<i64>,
    /// Customer being edited; their current locker is preselected
    customer_id: Option<i64>,
    on_assigned: Callback<AssignmentResult>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = AssignLockerViewModel::new(center_id, customer_id);
    let store = use_holder_forms();
    vm.load();

    let close = Callback::new(move |_| {
        vm.close();
        on_close.run(());
    });

    let interactive = Signal::derive(move || vm.session.with(|s| s.is_interactive()));

    let room_options = Signal::derive(move || {
        vm.session.with(|s| {
            s.rooms()
                .into_iter()
                .map(|id| (id.to_string(), format!("Room {}", id)))
                .collect::<Vec<_>>()
        })
    });
    let cabinet_options = Signal::derive(move || {
        vm.session.with(|s| {
            s.cabinets()
                .into_iter()
                .map(|n| (n.clone(), format!("Cabinet {}", n)))
                .collect::<Vec<_>>()
        })
    });
    let size_options = Signal::derive(move || {
        vm.session.with(|s| {
            s.sizes()
                .into_iter()
                .map(|size| (size.clone(), size))
                .collect::<Vec<_>>()
        })
    });

    let room_value = Signal::derive(move || {
        vm.session
            .with(|s| s.filters().room().map(|r| r.to_string()).unwrap_or_default())
    });
    let cabinet_value = Signal::derive(move || {
        vm.session
            .with(|s| s.filters().cabinet().map(|c| c.label()).unwrap_or_default())
    });
    let size_value = Signal::derive(move || {
        vm.session
            .with(|s| s.filters().size().map(str::to_string).unwrap_or_default())
    });

    view! {
        <ModalFrame on_close=close modal_class="assign-locker-modal">
            <div class="details-header">
                <h3>{icon("lock")} "Assign Locker"</h3>
                <button class="button button--icon modal__close" on:click=move |_| close.run(())>
                    {icon("x")}
                </button>
            </div>

            {move || match vm.session.with(|s| s.load_state().clone()) {
                LoadState::Loading => view! {
                    <div class="loading">"Loading lockers..."</div>
                }.into_any(),
                LoadState::Failed(message) => view! {
                    <div class="error">
                        <span>{message}</span>
                        <button class="btn btn-secondary" on:click=move |_| vm.retry()>
                            {icon("refresh")}
                            "Retry"
                        </button>
                    </div>
                }.into_any(),
                LoadState::Idle | LoadState::Loaded => ().into_any(),
            }}

            <div class="assign-locker__filters">
                <Select
                    id="assign-locker-room"
                    label="Room"
                    value=room_value
                    options=room_options
                    disabled=Signal::derive(move || !interactive.get() || room_options.get().is_empty())
                    on_change=Callback::new(move |v| vm.select_room(v))
                />
                <Select
                    id="assign-locker-cabinet"
                    label="Cabinet"
                    value=cabinet_value
                    options=cabinet_options
                    disabled=Signal::derive(move || cabinet_options.get().is_empty())
                    on_change=Callback::new(move |v| vm.select_cabinet(v))
                />
                <Select
                    id="assign-locker-size"
                    label="Size"
                    value=size_value
                    options=size_options
                    disabled=Signal::derive(move || size_options.get().is_empty())
                    on_change=Callback::new(move |v| vm.select_size(v))
                />
            </div>

            <ReservedLockers vm=vm />

            <div class="locker-grid">
                {move || {
                    let grid = vm.session.with(|s| s.visible_grid());
                    if grid.is_empty() {
                        return view! {
                            <div class="locker-grid__empty">"No lockers for the selected filters"</div>
                        }.into_any();
                    }
                    let selected_id = vm.session.with(|s| s.selection().map(|sel| sel.locker_id));
                    grid.rows()
                        .iter()
                        .map(|row| view! {
                            <div class="locker-grid__row">
                                {row.iter().map(|cell| locker_cell(vm, cell, selected_id)).collect_view()}
                            </div>
                        })
                        .collect_view()
                        .into_any()
                }}
            </div>

            <div class="details-actions">
                <span class="assign-locker__selection">
                    {move || vm.session.with(|s| s.selection().map(|sel| {
                        format!("Selected: {} ({})", sel.locker_number, sel.size)
                    }))}
                </span>
                <button
                    class="btn btn-primary"
                    disabled=move || !vm.can_assign()
                    on:click=move |_| vm.assign_command(store, on_assigned)
                >
                    {icon("check")}
                    "Assign"
                </button>
                <button class="btn btn-secondary" on:click=move |_| close.run(())>
                    "Cancel"
                </button>
            </div>
        </ModalFrame>
    }
}

fn locker_cell(vm: AssignLockerViewModel, cell: &GridCell, selected_id: Option<i64>) -> impl IntoView {
    let locker_id = cell.locker.locker_id;
    let status_label = cell.locker.status.unavailable_label();
    let is_selected = selected_id == Some(locker_id);

    let class = match (status_label, is_selected) {
        (Some(_), _) => "locker-cell locker-cell--disabled",
        (None, true) => "locker-cell locker-cell--selected",
        (None, false) => "locker-cell",
    };

    view! {
        <button
            class=class
            disabled=status_label.is_some()
            title=status_label.unwrap_or("Available")
            data-row=cell.row.to_string()
            data-column=cell.column.to_string()
            on:click=move |_| vm.click_locker(locker_id)
        >
            <span class="locker-cell__name">{cell.locker.locker_name.clone()}</span>
            {status_label.map(|label| view! { <span class="locker-cell__status">{label}</span> })}
        </button>
    }
}

#[component]
fn ReservedLockers(vm: AssignLockerViewModel) -> impl IntoView {
    move || {
        let reserved = vm.session.with(|s| s.reserved_lockers().to_vec());
        if reserved.is_empty() {
            return ().into_any();
        }
        let selected_id = vm.session.with(|s| s.selection().map(|sel| sel.locker_id));

        view! {
            <div class="assign-locker__reserved">
                <h4>"Reserved lockers"</h4>
                {reserved
                    .into_iter()
                    .map(|r| {
                        let locker_id = r.locker_id;
                        let class = if selected_id == Some(locker_id) {
                            "locker-cell locker-cell--reserved locker-cell--selected"
                        } else {
                            "locker-cell locker-cell--reserved"
                        };
                        view! {
                            <button class=class title=r.status.display_name() on:click=move |_| vm.click_reserved(locker_id)>
                                <span class="locker-cell__name">{r.locker_name}</span>
                                <span class="locker-cell__status">{r.size}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any()
    }
}
