/// Shared look of both pages: brand colors, buttons, cards and section spacing.
pub const THEME: &str = r#"
:root {
    --brand-pink: #C70276;
    --brand-pink-glow: #FF77B5;
    --brand-pink-light: #FFE4F1;
}
body {
    margin: 0;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    color: #111827;
    background: #fff;
}
.container {
    max-width: 1200px;
    margin: 0 auto;
    padding: 0 1.5rem;
}
.section-padding {
    padding: 6rem 0;
    position: relative;
    overflow: hidden;
}
.text-gradient {
    background: linear-gradient(135deg, var(--brand-pink), var(--brand-pink-glow));
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
}
.section-title {
    font-size: 3.5rem;
    font-weight: 900;
    margin: 0 0 2rem;
    text-align: center;
}
.section-lead {
    font-size: 1.25rem;
    color: #4b5563;
    max-width: 48rem;
    margin: 0 auto 4rem;
    text-align: center;
    line-height: 1.7;
}
.btn-primary, .btn-secondary {
    display: inline-flex;
    align-items: center;
    gap: 0.75rem;
    padding: 1rem 2rem;
    font-size: 1.1rem;
    font-weight: 700;
    border-radius: 9999px;
    border: none;
    cursor: pointer;
    box-shadow: 0 4px 15px rgba(199, 2, 118, 0.2);
}
.btn-primary {
    background: linear-gradient(135deg, var(--brand-pink), var(--brand-pink-glow));
    color: white;
}
.btn-secondary {
    background: white;
    color: var(--brand-pink);
    border: 2px solid var(--brand-pink);
}
.btn-primary:disabled, .btn-secondary:disabled {
    opacity: 0.5;
    cursor: not-allowed;
}
.glass {
    background: rgba(255, 255, 255, 0.7);
    backdrop-filter: blur(12px);
    border: 1px solid rgba(199, 2, 118, 0.1);
    border-radius: 1.5rem;
    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.1);
}
.card {
    background: white;
    border-radius: 1.5rem;
    padding: 2rem;
    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.1);
}
.icon-tile {
    width: 4rem;
    height: 4rem;
    border-radius: 1rem;
    display: flex;
    align-items: center;
    justify-content: center;
    margin: 0 auto 1.5rem;
    font-size: 1.75rem;
    background: linear-gradient(135deg, rgba(199, 2, 118, 0.2), rgba(255, 119, 181, 0.3));
}
.grid-3 {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
    gap: 2rem;
}
.spinner {
    display: inline-block;
    width: 20px;
    height: 20px;
    border: 3px solid rgba(255, 255, 255, 0.3);
    border-radius: 50%;
    border-top-color: #fff;
    animation: spin 1s ease-in-out infinite;
}
.blob {
    position: absolute;
    border-radius: 9999px;
    filter: blur(40px);
    pointer-events: none;
}
@keyframes spin { to { transform: rotate(360deg); } }
@keyframes float {
    0%, 100% { transform: translateY(0); }
    50% { transform: translateY(-20px); }
}
@keyframes bounce-gentle {
    0%, 100% { transform: translate(-50%, 0); }
    50% { transform: translate(-50%, -10px); }
}
@media (max-width: 768px) {
    .section-title { font-size: 2.5rem; }
    .section-padding { padding: 4rem 0; }
}
"#;
