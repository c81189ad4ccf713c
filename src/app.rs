use eframe::egui;

use crate::data::model::BookTable;
use crate::state::{AppState, Tab};
use crate::ui::{panels, views};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct BookDashApp {
    pub state: AppState,
}

impl BookDashApp {
    pub fn new(table: BookTable) -> Self {
        Self {
            state: AppState::new(table),
        }
    }
}

impl eframe::App for BookDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: sort order + dataset summary ----
        egui::SidePanel::left("sort_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: tab strip + active view ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal_wrapped(|ui| {
                for tab in Tab::ALL {
                    ui.selectable_value(&mut self.state.active_tab, tab, tab.label());
                }
            });
            ui.separator();

            match self.state.active_tab {
                Tab::Alphabet => views::alphabet_tab(ui, &mut self.state),
                Tab::Rank => views::rank_tab(ui, &mut self.state),
                Tab::WaitTimes => views::wait_times_tab(ui, &mut self.state),
                Tab::Format => views::format_tab(ui, &mut self.state),
                Tab::RankRating => views::rank_rating_tab(ui, &mut self.state),
                Tab::TopAuthors => views::top_authors_tab(ui, &mut self.state),
                Tab::About => views::about_tab(ui, &mut self.state),
            }
        });
    }
}
