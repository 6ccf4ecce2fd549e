mod helpers;
pub mod layout;
pub mod views;

use crate::app::{TrackerApp, store};
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for TrackerApp {
    fn update(&mut self, ctx: &Context, frame: &mut Frame) {
        // 1) cronómetro: avanza con el reloj del frame y pide repintar
        //    mientras corre para que el marcador no se congele
        if let Some(timer) = &mut self.timer {
            let now = ctx.input(|i| i.time);
            timer.tick(now);
            if timer.running {
                ctx.request_repaint_after(std::time::Duration::from_secs(1));
            }
        }

        top_panel(self, ctx);
        bottom_panel(ctx);

        // Tablero principal con filtros, tarjetas y tabla
        views::board::ui_board(self, ctx);

        // Diálogos por encima del tablero
        if self.show_plan {
            views::plan::ui_plan(self, ctx);
        }
        if self.show_calendar {
            views::calendar::ui_calendar(self, ctx);
        }
        if self.show_export {
            views::export::ui_export(self, ctx);
        }
        if self.show_add {
            views::add::ui_add(self, ctx);
        }
        if self.show_universal_notes {
            views::universal_notes::ui_universal_notes(self, ctx);
        }
        if self.notes_dialog.is_some() {
            views::notes::ui_notes(self, ctx);
        }
        if self.confirm_reset {
            self.confirm_reset(ctx);
        }

        // 2) persistencia síncrona: toda mutación acaba el frame guardada
        if self.dirty {
            if let Some(storage) = frame.storage_mut() {
                store::persist(storage, &self.problems, &self.universal_notes);
                storage.flush();
                self.dirty = false;
            }
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        store::persist(storage, &self.problems, &self.universal_notes);
    }
}
