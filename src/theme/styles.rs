//! Global CSS styles for Bloomcard.
//!
//! Night-garden aesthetic: black backdrop, glowing petals, CSS-driven
//! growth and sparkle animations.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* NIGHT (Backgrounds) */
  --night-black: #000000;
  --night-soft: #0b0712;
  --night-border: #241a30;

  /* GARDEN */
  --stem-green: #39c16c;
  --leaf-green: #2e9e58;
  --grass-green: #1f7a43;

  /* PETAL */
  --petal-pink: #f672b0;
  --petal-glow: rgba(246, 114, 176, 0.35);

  /* TEXT */
  --text-primary: #ffffff;
  --text-secondary: rgba(255, 255, 255, 0.7);
  --text-muted: rgba(255, 255, 255, 0.45);

  /* SEMANTIC */
  --seed-brown: #8a5a2b;
  --copied-green: #46d37e;

  /* Typography */
  --font-display: 'Trebuchet MS', 'Segoe UI', sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-display);
  background: var(--night-soft);
  color: var(--text-primary);
  min-height: 100vh;
  overflow: hidden;
}

/* === Editor Layout === */
.editing-mode {
  display: grid;
  grid-template-columns: 320px 1fr;
  gap: 1.5rem;
  height: 100vh;
  padding: 1.5rem;
}

.config-panel {
  background: rgba(255, 255, 255, 0.04);
  border: 1px solid var(--night-border);
  border-radius: 12px;
  padding: 1.5rem;
  overflow-y: auto;
}

.panel-title {
  font-size: 1.5rem;
  margin-bottom: 1.5rem;
  color: var(--petal-pink);
  text-shadow: 0 0 20px var(--petal-glow);
}

.section-label {
  display: block;
  font-size: 0.8rem;
  text-transform: uppercase;
  letter-spacing: 0.08em;
  color: var(--text-secondary);
  margin-bottom: 0.5rem;
}

/* === Flower Type Selector === */
.type-options {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  margin-bottom: 1.5rem;
}

.type-option {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding: 0.6rem 0.8rem;
  border: 1px solid var(--night-border);
  border-radius: 8px;
  cursor: pointer;
  transition: border-color var(--transition-fast), background var(--transition-fast);
}

.type-option:hover {
  background: rgba(255, 255, 255, 0.05);
}

.type-option.selected {
  border-color: var(--petal-pink);
  background: rgba(246, 114, 176, 0.08);
}

.type-option input[type="radio"] {
  accent-color: var(--petal-pink);
}

.type-glyph {
  font-size: 1.6rem;
}

.type-name {
  color: var(--text-primary);
}

/* === Form Fields === */
.form-field {
  margin-bottom: 1.5rem;
}

.input-field {
  width: 100%;
  background: transparent;
  border: 1px solid var(--night-border);
  border-radius: 8px;
  color: var(--text-primary);
  font-family: var(--font-mono);
  font-size: 0.9rem;
  padding: 0.6rem;
  transition: border-color var(--transition-fast);
}

.input-field:focus {
  outline: none;
  border-color: var(--petal-pink);
  box-shadow: 0 0 8px var(--petal-glow);
}

.input-field.textarea {
  resize: vertical;
  line-height: 1.5;
}

.color-input {
  width: 3.5rem;
  height: 2.2rem;
  padding: 0.15rem;
  cursor: pointer;
}

.color-row {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.color-hex {
  font-family: var(--font-mono);
  color: var(--text-secondary);
}

.message-input-wrapper {
  position: relative;
}

.char-count {
  position: absolute;
  right: 0.5rem;
  bottom: 0.4rem;
  font-size: 0.7rem;
  font-family: var(--font-mono);
  color: var(--text-muted);
}

/* === Buttons === */
.btn-primary, .btn-generate, .btn-ghost {
  font-family: var(--font-display);
  border-radius: 8px;
  cursor: pointer;
  transition: all var(--transition-fast);
}

.btn-primary {
  background: transparent;
  border: 1px solid var(--petal-pink);
  color: var(--petal-pink);
  padding: 0.5rem 1.2rem;
}

.btn-primary:hover {
  background: rgba(246, 114, 176, 0.12);
  box-shadow: 0 0 12px var(--petal-glow);
}

.btn-primary.copied {
  border-color: var(--copied-green);
  color: var(--copied-green);
}

.btn-generate {
  background: linear-gradient(135deg, var(--petal-pink), #b04ddb);
  border: none;
  color: #fff;
  font-size: 1.1rem;
  padding: 0.8rem 2.5rem;
  box-shadow: 0 0 18px var(--petal-glow);
}

.btn-generate:hover {
  transform: translateY(-2px);
  box-shadow: 0 0 28px var(--petal-glow);
}

.btn-ghost {
  background: transparent;
  border: 1px solid var(--night-border);
  color: var(--text-secondary);
  padding: 0.5rem 1.2rem;
}

.btn-ghost:hover {
  color: var(--text-primary);
  border-color: var(--text-muted);
}

.icon-btn {
  background: transparent;
  border: none;
  color: var(--text-secondary);
  font-size: 1.3rem;
  cursor: pointer;
}

.icon-btn:hover {
  color: var(--text-primary);
}

/* === Preview === */
.preview-panel {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.preview-screen {
  position: relative;
  flex: 1;
  background: var(--night-black);
  border: 1px solid var(--night-border);
  border-radius: 12px;
  overflow: hidden;
}

.generate-section {
  display: flex;
  justify-content: center;
  padding-bottom: 0.5rem;
}

/* === Shared (Recipient) View === */
.shared-view {
  position: fixed;
  inset: 0;
  background: var(--night-black);
  z-index: 10;
}

/* === Typewriter === */
.typewriter-text {
  position: absolute;
  top: 12%;
  left: 50%;
  transform: translateX(-50%);
  max-width: 80%;
  font-size: 1.6rem;
  text-align: center;
  white-space: pre-wrap;
  z-index: 5;
}

.cursor {
  animation: blink 0.9s step-end infinite;
}

@keyframes blink {
  50% { opacity: 0; }
}

/* === Meadow === */
.meadow {
  position: absolute;
  bottom: 0;
  left: 0;
  width: 100%;
  height: 70%;
}

.grass {
  position: absolute;
  bottom: 0;
  width: 0.6vmin;
  background: linear-gradient(to top, var(--grass-green), var(--stem-green));
  border-radius: 50% 50% 0 0;
  transform-origin: bottom center;
  animation: grass-grow 1.2s ease-out backwards, sway 4s ease-in-out infinite alternate;
}

@keyframes grass-grow {
  from { transform: scaleY(0); }
  to { transform: scaleY(1); }
}

@keyframes sway {
  from { rotate: -3deg; }
  to { rotate: 3deg; }
}

/* === Flower === */
.flower {
  position: absolute;
  bottom: 0;
  display: flex;
  flex-direction: column;
  align-items: center;
}

.flower-head {
  position: relative;
  width: 16vmin;
  height: 16vmin;
  z-index: 2;
  animation: bloom 1.4s cubic-bezier(0.2, 0.9, 0.3, 1.2) backwards;
  transform-origin: bottom center;
}

@keyframes bloom {
  from { transform: scale(0); }
  to { transform: scale(1); }
}

.petal {
  position: absolute;
  left: 50%;
  bottom: 50%;
  width: 4.5vmin;
  height: 8vmin;
  border-radius: 50% 50% 50% 50% / 65% 65% 35% 35%;
  transform-origin: bottom center;
  opacity: 0.95;
}

.tepal {
  border-radius: 50% 50% 20% 20% / 70% 70% 30% 30%;
}

.stamen {
  position: absolute;
  left: 50%;
  bottom: 50%;
  width: 0.35vmin;
  height: 4.5vmin;
  background: #e8c94a;
  border-radius: 0.2vmin;
  transform-origin: bottom center;
}

.stamen::after {
  content: '';
  position: absolute;
  top: -0.7vmin;
  left: -0.35vmin;
  width: 1vmin;
  height: 1vmin;
  background: #c9731f;
  border-radius: 50%;
}

.pistil {
  position: absolute;
  left: 50%;
  bottom: 50%;
  width: 0.5vmin;
  height: 5vmin;
  background: #d8e04a;
  border-radius: 0.3vmin;
  transform: translateX(-50%);
  transform-origin: bottom center;
}

.stem {
  position: relative;
  width: 0.7vmin;
  background: linear-gradient(to top, var(--grass-green), var(--stem-green));
  transform-origin: bottom center;
  animation: stem-grow 1.2s ease-out backwards;
  z-index: 1;
}

@keyframes stem-grow {
  from { transform: scaleY(0); }
  to { transform: scaleY(1); }
}

.stem-leaf {
  position: absolute;
  width: 3vmin;
  height: 1.4vmin;
  background: var(--leaf-green);
  border-radius: 80% 20% 80% 20%;
}

.stem-leaf.left {
  right: 0.5vmin;
  transform: rotate(20deg);
}

.stem-leaf.right {
  left: 0.5vmin;
  transform: rotate(-20deg) scaleX(-1);
}

/* === Sparkles === */
.sparkle {
  position: absolute;
  bottom: 40%;
  width: 1vmin;
  height: 1vmin;
  border-radius: 50%;
  opacity: 0;
  animation: sparkle-rise 3.5s ease-in infinite;
}

@keyframes sparkle-rise {
  0% { opacity: 0; transform: translateY(0) scale(0.6); }
  20% { opacity: 0.9; }
  80% { opacity: 0.4; }
  100% { opacity: 0; transform: translateY(-18vmin) scale(1.1); }
}

/* === Seeds === */
.seeds-container {
  position: absolute;
  inset: 0;
  pointer-events: none;
  z-index: 4;
}

.seed {
  position: absolute;
  width: 1.6vmin;
  height: 2vmin;
  background: radial-gradient(ellipse at 35% 30%, #b07a3f, var(--seed-brown));
  border-radius: 50% 50% 50% 50% / 60% 60% 40% 40%;
  cursor: pointer;
  pointer-events: auto;
  transition: transform var(--transition-fast);
}

.seed:hover {
  transform: scale(1.3);
  box-shadow: 0 0 8px rgba(176, 122, 63, 0.8);
}

/* === Link Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  background: rgba(0, 0, 0, 0.7);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 20;
}

.link-modal {
  background: var(--night-soft);
  border: 1px solid var(--petal-pink);
  border-radius: 12px;
  box-shadow: 0 0 40px var(--petal-glow);
  padding: 1.5rem;
  width: min(34rem, 90vw);
}

.modal-title {
  font-size: 1.2rem;
  margin-bottom: 1rem;
  color: var(--petal-pink);
}

.link-wrapper {
  display: flex;
  gap: 0.5rem;
  margin-bottom: 1rem;
}

.link-input {
  flex: 1;
}

.modal-actions {
  display: flex;
  justify-content: flex-end;
}
"#;
