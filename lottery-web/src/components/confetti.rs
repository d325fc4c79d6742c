//! Confetti Overlay Component
//! Scatters falling confetti pieces over the page while a winner is celebrated

use leptos::prelude::*;

const PIECE_COUNT: usize = 120;
const COLORS: [&str; 6] = ["#ff4d4d", "#ffd24d", "#4dff88", "#4dc3ff", "#b84dff", "#ffffff"];

/// One confetti piece, positioned in viewport percent.
#[derive(Clone, Debug, PartialEq)]
struct Piece {
    left: f64,
    delay: f64,
    duration: f64,
    size: f64,
    rotation: f64,
    color: &'static str,
}

impl Piece {
    fn random() -> Self {
        let color_index = (js_sys::Math::random() * COLORS.len() as f64) as usize;
        Self {
            left: js_sys::Math::random() * 100.0,
            delay: js_sys::Math::random() * 1.5,
            duration: js_sys::Math::random() * 2.0 + 2.5,
            size: js_sys::Math::random() * 6.0 + 6.0,
            rotation: js_sys::Math::random() * 360.0,
            color: COLORS[color_index.min(COLORS.len() - 1)],
        }
    }

    fn style(&self) -> String {
        format!(
            "left: {:.2}%; width: {:.1}px; height: {:.1}px; background: {}; \
            transform: rotate({:.0}deg); animation-delay: {:.2}s; animation-duration: {:.2}s;",
            self.left,
            self.size,
            self.size * 0.4,
            self.color,
            self.rotation,
            self.delay,
            self.duration
        )
    }
}

/// Rendered only while `celebrating` is set; unmounting removes every piece.
#[component]
pub fn Confetti() -> impl IntoView {
    let pieces: Vec<Piece> = (0..PIECE_COUNT).map(|_| Piece::random()).collect();

    view! {
        <div class="confetti" aria-hidden="true">
            {pieces
                .into_iter()
                .map(|piece| view! { <div class="confetti-piece" style=piece.style()></div> })
                .collect::<Vec<_>>()}
        </div>
    }
}
