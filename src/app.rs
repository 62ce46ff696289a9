use crate::canvas::Canvas;
use crate::controller::InteractionController;
use crate::input::InputHandler;
use crate::texture::CanvasTexture;

/// Native window around the editor: the canvas at 1:1 plus a status bar.
pub struct PaintApp {
    controller: InteractionController,
    input: InputHandler,
    texture: CanvasTexture,
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, controller: InteractionController) -> Self {
        Self {
            controller,
            input: InputHandler::new(),
            texture: CanvasTexture::new(),
        }
    }

    fn status_bar(&self, ui: &mut egui::Ui) {
        let selection = self.controller.selection();
        ui.horizontal(|ui| {
            ui.label(format!("Tool: {}", selection.tool.label()));
            ui.separator();
            ui.label("Color:");
            let (rect, _) = ui.allocate_exact_size(egui::vec2(16.0, 16.0), egui::Sense::hover());
            ui.painter().rect_filled(rect, 2.0, selection.color);
        });
    }
}

impl eframe::App for PaintApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| self.status_bar(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            let canvas = self.controller.canvas();
            let size = egui::vec2(canvas.width() as f32, canvas.height() as f32);
            let (response, painter) = ui.allocate_painter(size, egui::Sense::click_and_drag());
            let rect = response.rect;

            for event in self.input.process_input(ctx, rect) {
                self.controller.on_pointer_event(event);
            }

            let texture_id = self.texture.texture_id(ctx, self.controller.canvas());
            let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
            painter.image(texture_id, rect, uv, egui::Color32::WHITE);
        });
    }
}
