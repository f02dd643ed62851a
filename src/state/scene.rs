use std::time::{Duration, Instant};

use log::debug;

use crate::model::{
    builtin_backgrounds, dark_preset, CanvasSticker, Position, StickerDef, StyleEdit, TemplateElement,
    Template, TextStyle, FONT_SIZE_MAX, FONT_SIZE_MIN,
};

/// The canvas always carries exactly four stat-text layers
pub const STAT_LAYER_COUNT: usize = 4;

/// Where a freshly added sticker lands, canvas-local
pub const STICKER_DROP_X: f32 = 100.0;
pub const STICKER_DROP_Y: f32 = 100.0;

/// A second press on the same element within this window counts as a
/// double-activation instead of a drag start
pub const DOUBLE_PRESS_WINDOW: Duration = Duration::from_millis(300);

/// Pointer travel (px) past which a press stops being a double-press candidate
pub const DRAG_DISTANCE_THRESHOLD: f32 = 4.0;

/// Space reserved for an element when clamping its position to the canvas,
/// so it can never be dragged fully out of view
fn reserved_size(target: ElementRef) -> (f32, f32) {
    match target {
        ElementRef::Stat(_) => (150.0, 50.0),
        ElementRef::Sticker(_) => (100.0, 50.0),
    }
}

/// A selectable/draggable element on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementRef {
    Stat(usize),
    Sticker(usize),
}

/// How a pointer press on an element was classified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    DragStart,
    DoubleActivate,
}

/// Timer-based double-press classifier: tracks the last press per element
/// and promotes a quick second press on the same element to a
/// double-activation.
#[derive(Debug, Default)]
pub struct GestureClassifier {
    last_press: Option<(ElementRef, Instant)>,
}

impl GestureClassifier {
    pub fn classify(&mut self, target: ElementRef) -> Gesture {
        self.classify_at(target, Instant::now())
    }

    pub fn classify_at(&mut self, target: ElementRef, at: Instant) -> Gesture {
        let gesture = match self.last_press {
            Some((prev, when))
                if prev == target && at.duration_since(when) <= DOUBLE_PRESS_WINDOW =>
            {
                Gesture::DoubleActivate
            }
            _ => Gesture::DragStart,
        };
        // A double-activation consumes the press history so a third quick
        // press starts over
        self.last_press = match gesture {
            Gesture::DoubleActivate => None,
            Gesture::DragStart => Some((target, at)),
        };
        gesture
    }

    /// Dragging past the distance threshold voids the pending press; the
    /// next press on the element is a fresh drag start.
    pub fn void_pending(&mut self) {
        self.last_press = None;
    }
}

/// One of the four fixed stat-text layers
#[derive(Debug, Clone, PartialEq)]
pub struct StatLayer {
    pub position: Position,
    pub style: TextStyle,
}

fn default_stat_layers() -> [StatLayer; STAT_LAYER_COUNT] {
    let layer = |font_size: f32, y: f32| StatLayer {
        position: Position::new(20.0, y),
        style: TextStyle::stat_default(font_size),
    };
    [
        layer(24.0, 50.0),
        layer(20.0, 100.0),
        layer(20.0, 150.0),
        layer(20.0, 200.0),
    ]
}

/// An in-flight drag: pointer and element coordinates captured at press
#[derive(Debug, Clone, Copy)]
struct DragState {
    target: ElementRef,
    pointer_start: Position,
    element_start: Position,
}

/// Single source of truth for everything rendered inside the decoration
/// surface: background, the four stat layers, placed stickers, template
/// decorations, selection and drag state.
#[derive(Debug)]
pub struct DecorationScene {
    /// Opaque reference to the background image; painting it is a rendering
    /// concern, failures included
    pub background: String,
    pub stat_layers: [StatLayer; STAT_LAYER_COUNT],
    pub template_elements: Vec<TemplateElement>,
    /// Paint order equals insertion order; later stickers draw on top
    pub stickers: Vec<CanvasSticker>,
    selection: Option<ElementRef>,
    drag: Option<DragState>,
    /// Measured canvas extent; None until the surface has been laid out
    canvas_size: Option<(f32, f32)>,
    classifier: GestureClassifier,
    created_at: Instant,
    next_instance_seq: u64,
}

impl Default for DecorationScene {
    fn default() -> Self {
        Self::new()
    }
}

impl DecorationScene {
    pub fn new() -> Self {
        let background = builtin_backgrounds()
            .first()
            .map(|p| p.uri.clone())
            .unwrap_or_default();
        Self {
            background,
            stat_layers: default_stat_layers(),
            template_elements: Vec::new(),
            stickers: Vec::new(),
            selection: None,
            drag: None,
            canvas_size: None,
            classifier: GestureClassifier::default(),
            created_at: Instant::now(),
            next_instance_seq: 0,
        }
    }

    /// Replace the background reference unconditionally
    pub fn set_background(&mut self, image_ref: impl Into<String>) {
        self.background = image_ref.into();
    }

    /// Record the laid-out canvas extent. Drags are ignored until this has
    /// been called at least once.
    pub fn set_canvas_size(&mut self, width: f32, height: f32) {
        self.canvas_size = Some((width, height));
    }

    pub fn canvas_size(&self) -> Option<(f32, f32)> {
        self.canvas_size
    }

    pub fn selection(&self) -> Option<ElementRef> {
        self.selection
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Atomic bulk replace: stat positions/styles 1:1 by index, decorative
    /// elements wholesale, selection cleared. Stickers are untouched. A
    /// template that declares a canvas background also swaps the photo to
    /// the dark preset.
    pub fn apply_template(&mut self, template: &Template) {
        for (layer, (position, style)) in self.stat_layers.iter_mut().zip(
            template
                .stat_positions
                .iter()
                .zip(template.stat_styles.iter()),
        ) {
            layer.position = *position;
            layer.style = style.clone();
        }
        self.template_elements = template.elements.clone();
        self.selection = None;
        self.drag = None;
        if template.canvas_background.is_some() {
            self.background = dark_preset().uri;
        }
        debug!("applied template {}", template.id);
    }

    /// Place a new sticker at the fixed drop point and append it on top.
    /// Does not change the selection. The instance id combines the catalog
    /// id, a millisecond timestamp and a monotonic counter so repeated
    /// placements within one millisecond stay distinct.
    pub fn add_sticker(&mut self, def: &StickerDef) -> &CanvasSticker {
        let millis = self.created_at.elapsed().as_millis();
        self.next_instance_seq += 1;
        let instance_id = format!("{}-{}-{}", def.id, millis, self.next_instance_seq);
        let sticker = CanvasSticker::from_def(
            instance_id,
            def,
            Position::new(STICKER_DROP_X, STICKER_DROP_Y),
        );
        debug!("added sticker {}", sticker.instance_id);
        let index = self.stickers.len();
        self.stickers.push(sticker);
        &self.stickers[index]
    }

    pub fn select_stat(&mut self, index: usize) {
        if index < STAT_LAYER_COUNT {
            self.selection = Some(ElementRef::Stat(index));
        }
    }

    pub fn select_sticker(&mut self, index: usize) {
        if index < self.stickers.len() {
            self.selection = Some(ElementRef::Sticker(index));
        }
    }

    pub fn selected_sticker(&self) -> Option<&CanvasSticker> {
        match self.selection {
            Some(ElementRef::Sticker(index)) => self.stickers.get(index),
            _ => None,
        }
    }

    pub fn selected_stat(&self) -> Option<&StatLayer> {
        match self.selection {
            Some(ElementRef::Stat(index)) => self.stat_layers.get(index),
            _ => None,
        }
    }

    /// Apply a style edit to the selected element. No-op when nothing is
    /// selected; decoration edits on a stat layer are ignored silently.
    pub fn update_selected_style(&mut self, edit: StyleEdit) {
        match self.selection {
            Some(ElementRef::Stat(index)) => {
                if let Some(layer) = self.stat_layers.get_mut(index) {
                    apply_text_edit(&mut layer.style, &edit);
                }
            }
            Some(ElementRef::Sticker(index)) => {
                if let Some(sticker) = self.stickers.get_mut(index) {
                    apply_text_edit(&mut sticker.style, &edit);
                    match edit {
                        StyleEdit::Background(background) => {
                            sticker.decoration.background = background;
                        }
                        StyleEdit::CornerRadius(radius) => {
                            sticker.decoration.corner_radius = Some(radius);
                        }
                        StyleEdit::Padding(padding) => {
                            sticker.decoration.padding = Some(padding);
                        }
                        _ => {}
                    }
                }
            }
            None => {}
        }
    }

    /// Remove the selected sticker and clear the selection. Stat layers
    /// cannot be deleted; with a stat (or nothing) selected this is a no-op.
    pub fn delete_selected_sticker(&mut self) {
        if let Some(ElementRef::Sticker(index)) = self.selection {
            if index < self.stickers.len() {
                let removed = self.stickers.remove(index);
                debug!("deleted sticker {}", removed.instance_id);
            }
            self.selection = None;
            self.drag = None;
        }
    }

    /// Clamp to canvas bounds and write into the selected element's
    /// position. Ignored until the canvas has been measured.
    pub fn move_selected(&mut self, position: Position) {
        let Some(target) = self.selection else {
            return;
        };
        let Some((width, height)) = self.canvas_size else {
            return;
        };
        let (min_w, min_h) = reserved_size(target);
        let clamped = Position::new(
            position.x.clamp(0.0, (width - min_w).max(0.0)),
            position.y.clamp(0.0, (height - min_h).max(0.0)),
        );
        match target {
            ElementRef::Stat(index) => {
                if let Some(layer) = self.stat_layers.get_mut(index) {
                    layer.position = clamped;
                }
            }
            ElementRef::Sticker(index) => {
                if let Some(sticker) = self.stickers.get_mut(index) {
                    sticker.position = clamped;
                }
            }
        }
    }

    /// Pointer-down on an element. Classifies the press, selects the
    /// element (implicitly ending any previous drag), and either arms a drag
    /// or reports a double-activation for the caller to open the style
    /// panel.
    pub fn begin_press(&mut self, target: ElementRef, pointer: Position) -> Gesture {
        self.begin_press_at(target, pointer, Instant::now())
    }

    pub fn begin_press_at(&mut self, target: ElementRef, pointer: Position, at: Instant) -> Gesture {
        let gesture = self.classifier.classify_at(target, at);
        self.selection = Some(target);
        self.drag = match gesture {
            Gesture::DragStart => self.position_of(target).map(|element_start| DragState {
                target,
                pointer_start: pointer,
                element_start,
            }),
            Gesture::DoubleActivate => None,
        };
        gesture
    }

    /// Pointer moved while a drag is armed. Ignored when no drag is active
    /// or the canvas has not been measured yet.
    pub fn drag_to(&mut self, pointer: Position) {
        let Some(drag) = self.drag else {
            return;
        };
        if self.canvas_size.is_none() {
            return;
        }
        let dx = pointer.x - drag.pointer_start.x;
        let dy = pointer.y - drag.pointer_start.y;
        if dx.abs().max(dy.abs()) > DRAG_DISTANCE_THRESHOLD {
            self.classifier.void_pending();
        }
        self.move_selected(Position::new(
            drag.element_start.x + dx,
            drag.element_start.y + dy,
        ));
    }

    /// Pointer released (or the hosting screen torn down): release the drag
    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    fn position_of(&self, target: ElementRef) -> Option<Position> {
        match target {
            ElementRef::Stat(index) => self.stat_layers.get(index).map(|l| l.position),
            ElementRef::Sticker(index) => self.stickers.get(index).map(|s| s.position),
        }
    }
}

fn apply_text_edit(style: &mut TextStyle, edit: &StyleEdit) {
    match edit {
        StyleEdit::FontSize(size) => {
            style.font_size = size.clamp(FONT_SIZE_MIN, FONT_SIZE_MAX);
        }
        StyleEdit::Color(color) => style.color = color.clone(),
        StyleEdit::Align(align) => style.text_align = *align,
        StyleEdit::FontFamily(family) => style.font_family = family.clone(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{builtin_stickers, builtin_templates, TextAlign};
    use pretty_assertions::assert_eq;

    fn scene_with_canvas(width: f32, height: f32) -> DecorationScene {
        let mut scene = DecorationScene::new();
        scene.set_canvas_size(width, height);
        scene
    }

    fn sticker_def(id: &str) -> StickerDef {
        builtin_stickers()
            .into_iter()
            .find(|d| d.id == id)
            .unwrap_or_else(|| panic!("{id} in catalog"))
    }

    fn template(id: &str) -> Template {
        builtin_templates()
            .into_iter()
            .find(|t| t.id == id)
            .unwrap_or_else(|| panic!("{id} in catalog"))
    }

    #[test]
    fn scene_mounts_with_four_default_layers() {
        let scene = DecorationScene::new();
        assert_eq!(scene.stat_layers.len(), 4);
        assert_eq!(scene.stat_layers[0].position, Position::new(20.0, 50.0));
        assert_eq!(scene.stat_layers[0].style.font_size, 24.0);
        assert_eq!(scene.stat_layers[3].position, Position::new(20.0, 200.0));
        assert!(scene.stickers.is_empty());
        assert_eq!(scene.selection(), None);
    }

    #[test]
    fn drag_always_lands_inside_canvas_bounds() {
        let mut scene = scene_with_canvas(400.0, 300.0);
        scene.select_stat(0);
        for (dx, dy) in [
            (1e6, 1e6),
            (-1e6, -1e6),
            (350.0, -900.0),
            (0.0, 5000.0),
            (-3.0, 2.0),
        ] {
            let start = scene.stat_layers[0].position;
            scene.move_selected(Position::new(start.x + dx, start.y + dy));
            let pos = scene.stat_layers[0].position;
            assert!(pos.x >= 0.0 && pos.x <= 400.0 - 150.0, "x = {}", pos.x);
            assert!(pos.y >= 0.0 && pos.y <= 300.0 - 50.0, "y = {}", pos.y);
        }
    }

    #[test]
    fn selection_is_mutually_exclusive() {
        let mut scene = scene_with_canvas(400.0, 300.0);
        scene.add_sticker(&sticker_def("run-day-1"));
        scene.select_stat(2);
        assert_eq!(scene.selection(), Some(ElementRef::Stat(2)));
        scene.select_sticker(0);
        assert_eq!(scene.selection(), Some(ElementRef::Sticker(0)));
        assert!(scene.selected_stat().is_none());
        scene.select_stat(1);
        assert_eq!(scene.selection(), Some(ElementRef::Stat(1)));
        assert!(scene.selected_sticker().is_none());
    }

    #[test]
    fn apply_template_is_idempotent_and_leaves_stickers_alone() {
        let mut scene = scene_with_canvas(400.0, 300.0);
        scene.add_sticker(&sticker_def("5k-circle"));
        let stickers_before = scene.stickers.clone();

        let t = template("black-minimal-r");
        scene.apply_template(&t);
        let once: Vec<StatLayer> = scene.stat_layers.to_vec();
        scene.apply_template(&t);
        let twice: Vec<StatLayer> = scene.stat_layers.to_vec();

        assert_eq!(once, twice);
        assert_eq!(scene.stat_layers[0].position, t.stat_positions[0]);
        assert_eq!(scene.stat_layers[3].style, t.stat_styles[3]);
        assert_eq!(scene.template_elements, t.elements);
        assert_eq!(scene.stickers, stickers_before);
        assert_eq!(scene.selection(), None);
    }

    #[test]
    fn dark_template_swaps_background_to_dark_preset() {
        let mut scene = DecorationScene::new();
        let original = scene.background.clone();
        scene.apply_template(&template("black-runday-bold"));
        assert_ne!(scene.background, original);
        assert_eq!(scene.background, dark_preset().uri);
    }

    #[test]
    fn add_then_delete_restores_sticker_list() {
        let mut scene = scene_with_canvas(400.0, 300.0);
        scene.add_sticker(&sticker_def("runner-1"));
        let before = scene.stickers.clone();

        scene.add_sticker(&sticker_def("5k-circle"));
        scene.select_sticker(1);
        scene.delete_selected_sticker();

        assert_eq!(scene.stickers, before);
        assert_eq!(scene.selection(), None);
    }

    #[test]
    fn delete_with_stat_selected_is_a_no_op() {
        let mut scene = scene_with_canvas(400.0, 300.0);
        scene.add_sticker(&sticker_def("runner-1"));
        scene.select_stat(0);
        scene.delete_selected_sticker();
        assert_eq!(scene.stickers.len(), 1);
        assert_eq!(scene.selection(), Some(ElementRef::Stat(0)));
    }

    #[test]
    fn paint_order_is_insertion_order_with_unique_ids() {
        let mut scene = scene_with_canvas(400.0, 300.0);
        let def = sticker_def("run-day-1");
        // Rapid same-definition placements land in the same millisecond
        // bucket; the counter keeps the ids distinct
        for _ in 0..10 {
            scene.add_sticker(&def);
        }
        let ids: Vec<String> = scene
            .stickers
            .iter()
            .map(|s| s.instance_id.clone())
            .collect();
        let mut unique = ids.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), ids.len());
        for sticker in &scene.stickers {
            assert_eq!(sticker.def.id, "run-day-1");
        }
    }

    #[test]
    fn style_edits_target_only_the_selection() {
        let mut scene = scene_with_canvas(400.0, 300.0);
        scene.add_sticker(&sticker_def("runner-1"));

        // nothing selected: silently ignored
        scene.update_selected_style(StyleEdit::Color("#ff6b6b".to_string()));
        assert_eq!(scene.stat_layers[0].style.color, "#ffffff");
        assert_eq!(scene.stickers[0].style.color, "#ffffff");

        scene.select_stat(1);
        scene.update_selected_style(StyleEdit::Color("#ff6b6b".to_string()));
        scene.update_selected_style(StyleEdit::Align(TextAlign::Right));
        assert_eq!(scene.stat_layers[1].style.color, "#ff6b6b");
        assert_eq!(scene.stat_layers[1].style.text_align, TextAlign::Right);
        assert_eq!(scene.stat_layers[0].style.color, "#ffffff");

        // decoration edit on a stat layer: silently ignored
        scene.update_selected_style(StyleEdit::Background(Some("#000000".to_string())));
        assert_eq!(scene.stat_layers[1].style.color, "#ff6b6b");

        scene.select_sticker(0);
        scene.update_selected_style(StyleEdit::Background(None));
        assert_eq!(scene.stickers[0].decoration.background, None);
    }

    #[test]
    fn panel_font_size_is_clamped_to_slider_bounds() {
        let mut scene = scene_with_canvas(400.0, 300.0);
        scene.select_stat(0);
        scene.update_selected_style(StyleEdit::FontSize(500.0));
        assert_eq!(scene.stat_layers[0].style.font_size, FONT_SIZE_MAX);
        scene.update_selected_style(StyleEdit::FontSize(1.0));
        assert_eq!(scene.stat_layers[0].style.font_size, FONT_SIZE_MIN);
        // template-applied sizes are not subject to the slider bounds
        scene.apply_template(&template("black-minimal-r"));
        assert!(scene.template_elements[0].style.font_size > FONT_SIZE_MAX);
    }

    #[test]
    fn drag_before_layout_is_ignored() {
        let mut scene = DecorationScene::new();
        let start = scene.stat_layers[0].position;
        scene.begin_press(ElementRef::Stat(0), Position::new(10.0, 10.0));
        scene.drag_to(Position::new(200.0, 200.0));
        assert_eq!(scene.stat_layers[0].position, start);
        // once measured, the same drag applies
        scene.set_canvas_size(400.0, 300.0);
        scene.drag_to(Position::new(30.0, 10.0));
        assert_eq!(
            scene.stat_layers[0].position,
            Position::new(start.x + 20.0, start.y)
        );
    }

    #[test]
    fn press_selects_and_drag_follows_pointer_delta() {
        let mut scene = scene_with_canvas(400.0, 300.0);
        scene.add_sticker(&sticker_def("5k-circle"));
        let gesture = scene.begin_press(ElementRef::Sticker(0), Position::new(120.0, 110.0));
        assert_eq!(gesture, Gesture::DragStart);
        assert_eq!(scene.selection(), Some(ElementRef::Sticker(0)));
        assert!(scene.is_dragging());

        scene.drag_to(Position::new(150.0, 140.0));
        assert_eq!(scene.stickers[0].position, Position::new(130.0, 130.0));

        scene.end_drag();
        assert!(!scene.is_dragging());
    }

    #[test]
    fn quick_second_press_is_a_double_activation() {
        let mut scene = scene_with_canvas(400.0, 300.0);
        let t0 = Instant::now();
        let first = scene.begin_press_at(ElementRef::Stat(0), Position::new(25.0, 55.0), t0);
        assert_eq!(first, Gesture::DragStart);
        let second = scene.begin_press_at(
            ElementRef::Stat(0),
            Position::new(25.0, 55.0),
            t0 + Duration::from_millis(150),
        );
        assert_eq!(second, Gesture::DoubleActivate);
        assert!(!scene.is_dragging());
        // a third quick press starts a fresh drag
        let third = scene.begin_press_at(
            ElementRef::Stat(0),
            Position::new(25.0, 55.0),
            t0 + Duration::from_millis(250),
        );
        assert_eq!(third, Gesture::DragStart);
    }

    #[test]
    fn slow_or_cross_element_presses_never_double_activate() {
        let mut classifier = GestureClassifier::default();
        let t0 = Instant::now();
        assert_eq!(
            classifier.classify_at(ElementRef::Stat(0), t0),
            Gesture::DragStart
        );
        assert_eq!(
            classifier.classify_at(ElementRef::Stat(0), t0 + Duration::from_millis(600)),
            Gesture::DragStart
        );
        assert_eq!(
            classifier.classify_at(ElementRef::Sticker(0), t0 + Duration::from_millis(650)),
            Gesture::DragStart
        );
    }

    #[test]
    fn dragging_past_threshold_voids_the_double_press() {
        let mut scene = scene_with_canvas(400.0, 300.0);
        let t0 = Instant::now();
        scene.begin_press_at(ElementRef::Stat(0), Position::new(25.0, 55.0), t0);
        scene.drag_to(Position::new(60.0, 55.0));
        let next = scene.begin_press_at(
            ElementRef::Stat(0),
            Position::new(60.0, 55.0),
            t0 + Duration::from_millis(100),
        );
        assert_eq!(next, Gesture::DragStart);
    }

    #[test]
    fn new_press_retargets_the_active_drag() {
        let mut scene = scene_with_canvas(400.0, 300.0);
        scene.add_sticker(&sticker_def("runner-1"));
        scene.begin_press(ElementRef::Stat(0), Position::new(25.0, 55.0));
        assert_eq!(scene.selection(), Some(ElementRef::Stat(0)));
        scene.begin_press(ElementRef::Sticker(0), Position::new(110.0, 110.0));
        assert_eq!(scene.selection(), Some(ElementRef::Sticker(0)));
        scene.drag_to(Position::new(115.0, 110.0));
        // only the sticker moved
        assert_eq!(scene.stickers[0].position, Position::new(105.0, 100.0));
        assert_eq!(scene.stat_layers[0].position, Position::new(20.0, 50.0));
    }

    #[test]
    fn end_to_end_template_sticker_drag_scenario() {
        let mut scene = scene_with_canvas(400.0, 300.0);
        let t = template("black-minimal-r");

        scene.apply_template(&t);
        for index in 0..STAT_LAYER_COUNT {
            assert_eq!(scene.stat_layers[index].position, t.stat_positions[index]);
            assert_eq!(scene.stat_layers[index].style, t.stat_styles[index]);
        }
        assert_eq!(scene.template_elements, t.elements);
        assert!(scene.stickers.is_empty());

        scene.add_sticker(&sticker_def("5k-circle"));
        assert_eq!(scene.stickers.len(), 1);
        // add does not auto-select
        assert_eq!(scene.selection(), None);

        scene.begin_press(ElementRef::Sticker(0), Position::new(100.0, 100.0));
        scene.drag_to(Position::new(1100.0, 1100.0));
        assert_eq!(
            scene.stickers[0].position,
            Position::new(400.0 - 100.0, 300.0 - 50.0)
        );
    }
}
