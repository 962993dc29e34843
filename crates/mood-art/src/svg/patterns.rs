//! Background pattern fragments, one per [`PatternKind`]

use crate::catalog::PatternKind;

type PatternRenderer = fn(&str) -> String;

impl PatternKind {
    /// Renderer for this pattern
    pub fn renderer(self) -> PatternRenderer {
        match self {
            PatternKind::Diamonds => diamonds,
            PatternKind::Rockets => rockets,
            PatternKind::Storm => storm,
            PatternKind::Waves => waves,
            PatternKind::Stars => stars,
            PatternKind::Chaos => chaos,
            PatternKind::Zen => zen,
            PatternKind::Tribal => tribal,
        }
    }

    pub fn render(self, color: &str) -> String {
        (self.renderer())(color)
    }
}

fn diamonds(color: &str) -> String {
    format!(
        r#"
    <g opacity="0.1">
      <polygon points="50,50 75,75 50,100 25,75" fill="{color}"/>
      <polygon points="150,30 175,55 150,80 125,55" fill="{color}"/>
      <polygon points="250,70 275,95 250,120 225,95" fill="{color}"/>
      <polygon points="350,40 375,65 350,90 325,65" fill="{color}"/>
    </g>
  "#
    )
}

fn rockets(color: &str) -> String {
    format!(
        r#"
    <g opacity="0.15">
      <path d="M30,80 L50,60 L45,40 L35,45 L25,45 Z" fill="{color}"/>
      <path d="M370,120 L350,100 L355,80 L365,85 L375,85 Z" fill="{color}"/>
      <circle cx="100" cy="300" r="3" fill="{color}">
        <animate attributeName="r" values="3;6;3" dur="2s" repeatCount="indefinite"/>
      </circle>
    </g>
  "#
    )
}

fn storm(color: &str) -> String {
    format!(
        r#"
    <g opacity="0.2">
      <path d="M20,60 Q50,40 80,60 Q110,80 140,60" stroke="{color}" stroke-width="2" fill="none"/>
      <path d="M260,100 Q290,80 320,100 Q350,120 380,100" stroke="{color}" stroke-width="2" fill="none"/>
      <circle cx="150" cy="300" r="2" fill="{color}">
        <animate attributeName="cy" values="300;280;300" dur="3s" repeatCount="indefinite"/>
      </circle>
    </g>
  "#
    )
}

fn waves(color: &str) -> String {
    format!(
        r#"
    <g opacity="0.15">
      <path d="M0,200 Q100,180 200,200 Q300,220 400,200" stroke="{color}" stroke-width="1" fill="none" opacity="0.5"/>
      <path d="M0,220 Q100,200 200,220 Q300,240 400,220" stroke="{color}" stroke-width="1" fill="none" opacity="0.3"/>
    </g>
  "#
    )
}

fn stars(color: &str) -> String {
    format!(
        r#"
    <g opacity="0.2">
      <circle cx="80" cy="80" r="2" fill="{color}">
        <animate attributeName="opacity" values="0.2;1;0.2" dur="3s" repeatCount="indefinite"/>
      </circle>
      <circle cx="320" cy="120" r="1.5" fill="{color}">
        <animate attributeName="opacity" values="0.2;1;0.2" dur="4s" repeatCount="indefinite"/>
      </circle>
      <circle cx="100" cy="300" r="2.5" fill="{color}">
        <animate attributeName="opacity" values="0.2;1;0.2" dur="2s" repeatCount="indefinite"/>
      </circle>
    </g>
  "#
    )
}

fn chaos(color: &str) -> String {
    format!(
        r#"
    <g opacity="0.15">
      <line x1="50" y1="50" x2="150" y2="80" stroke="{color}" stroke-width="1"/>
      <line x1="250" y1="40" x2="350" y2="120" stroke="{color}" stroke-width="1"/>
      <line x1="80" y1="300" x2="320" y2="280" stroke="{color}" stroke-width="1"/>
    </g>
  "#
    )
}

fn zen(color: &str) -> String {
    format!(
        r#"
    <g opacity="0.1">
      <circle cx="200" cy="200" r="150" fill="none" stroke="{color}" stroke-width="1"/>
      <circle cx="200" cy="200" r="100" fill="none" stroke="{color}" stroke-width="1"/>
      <circle cx="200" cy="200" r="50" fill="none" stroke="{color}" stroke-width="1"/>
    </g>
  "#
    )
}

fn tribal(color: &str) -> String {
    format!(
        r#"
    <g opacity="0.2">
      <path d="M50,50 L70,30 L90,50 L70,70 Z" fill="{color}"/>
      <path d="M350,350 L330,330 L350,310 L370,330 Z" fill="{color}"/>
    </g>
  "#
    )
}
