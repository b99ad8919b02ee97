//! Built-in host page template.
//!
//! Region markers (`<!-- region:NAME -->`) are substituted by
//! [`super::page::PageTemplate::instantiate`]. Custom templates must carry
//! the same four required markers; `title` is optional.

pub const DEFAULT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title><!-- region:title --></title>
    <style>
        :root {
            --color-bg: #f8fafc;
            --color-card: #ffffff;
            --color-border: #e2e8f0;
            --color-text: #1e293b;
            --color-text-muted: #64748b;
            --color-tag-bg: #eef2ff;
            --color-link: #4f46e5;
            --color-chart-bar: #d9d9d9;
            --color-chart-bar-stroke: #bdbdbd;
            --color-chart-baseline: #bbbbbb;
        }
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
            background: var(--color-bg);
            color: var(--color-text);
            line-height: 1.6;
            padding: 2rem;
        }
        .container { max-width: 960px; margin: 0 auto; }
        h1 { font-size: 1.875rem; font-weight: 700; margin-bottom: 1rem; }
        .status-line { color: var(--color-text-muted); font-size: 0.875rem; margin-bottom: 0.75rem; }
        .filter-row { display: flex; align-items: center; gap: 0.5rem; margin-bottom: 1.25rem; }
        .filter-row label { font-size: 0.875rem; color: var(--color-text-muted); }
        #pub-filter { padding: 0.375rem 0.625rem; border: 1px solid var(--color-border); border-radius: 0.375rem; background: var(--color-card); font-size: 0.875rem; }
        .pub-list { display: grid; gap: 1rem; }
        .pub-card { display: grid; grid-template-columns: 96px 1fr; gap: 1rem; background: var(--color-card); border: 1px solid var(--color-border); border-radius: 0.5rem; padding: 1rem; }
        .pub-card.hidden { display: none; }
        .pub-thumb { width: 96px; height: auto; border-radius: 0.25rem; }
        .pub-title { font-weight: 600; margin-bottom: 0.25rem; }
        .tag { display: inline-block; background: var(--color-tag-bg); color: var(--color-text); padding: 0.125rem 0.625rem; border-radius: 9999px; font-size: 0.75rem; margin-right: 0.375rem; }
        .pub-authors { margin-top: 6px; font-size: 0.875rem; }
        .pub-links { margin-top: 0.5rem; }
        .pub-links a { color: var(--color-link); font-size: 0.875rem; margin-right: 0.75rem; }
        .chart-container { background: var(--color-card); border: 1px solid var(--color-border); border-radius: 0.5rem; padding: 1.25rem; margin-top: 2rem; }
        .chart-container svg { width: 100%; height: auto; }
        .chart-container svg rect { transition: opacity 0.15s ease; }
        .chart-container svg rect:hover { opacity: 0.85; }
        .footer { margin-top: 2rem; padding-top: 1rem; border-top: 1px solid var(--color-border); font-size: 0.75rem; color: var(--color-text-muted); text-align: center; }
    </style>
</head>
<body>
    <div class="container">
        <h1><!-- region:title --></h1>
        <p id="pub-status" class="status-line"><!-- region:status --></p>
        <div class="filter-row">
            <label for="pub-filter">Type</label>
            <!-- region:filter -->
        </div>
        <div id="pub-list" class="pub-list">
<!-- region:list -->
        </div>
        <div class="chart-container">
<!-- region:chart -->
        </div>
        <div class="footer">
            Generated by <strong>pubpage</strong>
        </div>
    </div>
    <script>
        (function() {
            // Filter changes re-render the list and status only; the chart
            // always shows the full dataset.
            const filter = document.getElementById('pub-filter');
            const status = document.getElementById('pub-status');
            const list = document.getElementById('pub-list');
            if (!filter || !status || !list) return;
            filter.addEventListener('change', () => {
                const value = filter.value;
                const cards = list.querySelectorAll('.pub-card');
                let shown = 0;
                cards.forEach(card => {
                    const match = value === 'all' || card.dataset.kind === value;
                    card.classList.toggle('hidden', !match);
                    if (match) shown += 1;
                });
                status.textContent = shown === 0
                    ? 'No publications match this filter.'
                    : `Showing ${shown} publication(s).`;
            });
        })();
    </script>
</body>
</html>
"#;
