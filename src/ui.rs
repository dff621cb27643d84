use crate::models::RevenueTable;

pub fn render_index(table: &RevenueTable) -> String {
    INDEX_HTML
        .replace("{{STATIONS}}", &table.stations.len().to_string())
        .replace("{{MONTHS}}", &table.months.len().to_string())
        .replace("{{ROWS}}", &table.rows.len().to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Toll Revenue Dashboard</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef3f8;
      --bg-2: #c9dcee;
      --ink: #24313c;
      --accent: #2563c9;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #dce9f5 60%, #f2f6fa 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(960px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5b6670;
      font-size: 1rem;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 8px;
    }

    .stat .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #83909b;
    }

    .stat .value {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .filters {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
      gap: 16px;
    }

    .filter {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 10px;
    }

    .filter label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #83909b;
    }

    .filter select {
      width: 100%;
      min-height: 130px;
      border: 1px solid rgba(47, 72, 88, 0.18);
      border-radius: 12px;
      padding: 8px;
      font-family: inherit;
      font-size: 0.95rem;
      color: var(--ink);
    }

    .filter select:focus {
      outline: 2px solid var(--accent);
    }

    .chart-card {
      background: white;
      border-radius: 20px;
      padding: 20px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 12px;
    }

    .chart-card h2 {
      margin: 0;
      font-size: 1.3rem;
    }

    .chart-card svg {
      width: 100%;
      height: 280px;
      display: block;
    }

    .chart-card svg text {
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
    }

    .chart-line {
      fill: none;
      stroke: var(--accent);
      stroke-width: 3;
    }

    .chart-point {
      fill: white;
      stroke: var(--accent);
      stroke-width: 2;
    }

    .chart-grid {
      stroke: rgba(47, 72, 88, 0.12);
    }

    .chart-label {
      fill: #76828c;
      font-size: 11px;
    }

    .chart-prompt {
      fill: #76828c;
      font-size: 15px;
    }

    .status {
      font-size: 0.95rem;
      color: #66717b;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .hint {
      margin: 0;
      color: #6d7882;
      font-size: 0.9rem;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Toll Revenue Dashboard</h1>
      <p class="subtitle">Monthly toll collection revenue across Colombia's national road network.</p>
    </header>

    <section class="panel">
      <div class="stat">
        <span class="label">Toll stations</span>
        <span class="value">{{STATIONS}}</span>
      </div>
      <div class="stat">
        <span class="label">Months</span>
        <span class="value">{{MONTHS}}</span>
      </div>
      <div class="stat">
        <span class="label">Revenue rows</span>
        <span class="value">{{ROWS}}</span>
      </div>
    </section>

    <section class="filters">
      <div class="filter">
        <label for="station-select">Toll stations</label>
        <select id="station-select" multiple></select>
      </div>
      <div class="filter">
        <label for="month-select">Months</label>
        <select id="month-select" multiple></select>
      </div>
    </section>

    <section class="chart-card">
      <h2 id="line-title">Total Revenue by Month</h2>
      <svg id="line-chart" viewBox="0 0 640 280" role="img" aria-label="Revenue by month"></svg>
    </section>

    <section class="chart-card">
      <h2 id="bar-title">Total Revenue by Rate Category</h2>
      <svg id="bar-chart" viewBox="0 0 640 280" role="img" aria-label="Revenue by rate category"></svg>
    </section>

    <div class="status" id="status"></div>
    <p class="hint">Hold Ctrl (Cmd on Mac) to select several stations or months. The station filter drives the line chart only; the month filter drives the bar chart only.</p>
  </main>

  <script>
    const stationSelect = document.getElementById('station-select');
    const monthSelect = document.getElementById('month-select');
    const statusEl = document.getElementById('status');
    const lineChartEl = document.getElementById('line-chart');
    const lineTitleEl = document.getElementById('line-title');
    const barChartEl = document.getElementById('bar-chart');
    const barTitleEl = document.getElementById('bar-title');

    const WIDTH = 640;
    const HEIGHT = 280;
    const PADDING_X = 56;
    const PADDING_Y = 36;
    const TOP = 24;

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const compact = new Intl.NumberFormat('en', { notation: 'compact', maximumFractionDigits: 1 });
    const formatValue = (value) => compact.format(value);

    const selectedValues = (select) =>
      Array.from(select.selectedOptions).map((option) => option.value);

    const fillOptions = (select, values, preselected) => {
      select.innerHTML = '';
      for (const value of values) {
        const option = document.createElement('option');
        option.value = value;
        option.textContent = value;
        option.selected = value === preselected;
        select.appendChild(option);
      }
    };

    const renderPrompt = (svg, message) => {
      svg.innerHTML = `<text class="chart-prompt" x="50%" y="50%" text-anchor="middle">${message}</text>`;
    };

    const yScale = (values) => {
      let max = Math.max(...values, 0);
      if (max === 0) {
        max = 1;
      }
      return (value) => HEIGHT - PADDING_Y - (value / max) * (HEIGHT - TOP - PADDING_Y);
    };

    const renderGrid = (svg, values) => {
      const y = yScale(values);
      const max = Math.max(...values, 1);
      const ticks = 4;
      let grid = '';
      for (let i = 0; i <= ticks; i += 1) {
        const value = (max * i) / ticks;
        const yPos = y(value);
        grid += `<line class="chart-grid" x1="${PADDING_X}" y1="${yPos}" x2="${WIDTH - PADDING_X}" y2="${yPos}" />`;
        grid += `<text class="chart-label" x="${PADDING_X - 10}" y="${yPos + 4}" text-anchor="end">${formatValue(value)}</text>`;
      }
      svg.innerHTML = grid;
      return y;
    };

    const renderLineChart = (figure) => {
      lineTitleEl.textContent = figure.title;
      if (!figure.points.length) {
        renderPrompt(lineChartEl, figure.title);
        return;
      }

      const values = figure.points.map((point) => point.value);
      const y = renderGrid(lineChartEl, values);
      const xStep = figure.points.length > 1
        ? (WIDTH - PADDING_X * 2) / (figure.points.length - 1)
        : 0;
      const x = (index) => PADDING_X + index * xStep;

      const path = figure.points
        .map((point, index) => `${index === 0 ? 'M' : 'L'} ${x(index).toFixed(2)} ${y(point.value).toFixed(2)}`)
        .join(' ');

      const labelEvery = Math.ceil(figure.points.length / 10);
      const xLabels = figure.points
        .map((point, index) => {
          if (index % labelEvery !== 0) {
            return '';
          }
          return `<text class="chart-label" x="${x(index)}" y="${HEIGHT - PADDING_Y + 18}" text-anchor="middle">${point.label}</text>`;
        })
        .join('');

      const circles = figure.points
        .map((point, index) => `<circle class="chart-point" cx="${x(index)}" cy="${y(point.value)}" r="4" />`)
        .join('');

      lineChartEl.innerHTML += `<path class="chart-line" d="${path}" />${circles}${xLabels}`;
    };

    const renderBarChart = (figure) => {
      barTitleEl.textContent = figure.title;
      if (!figure.points.length) {
        renderPrompt(barChartEl, figure.title);
        return;
      }

      const values = figure.points.map((point) => point.value);
      const y = renderGrid(barChartEl, values);
      const slot = (WIDTH - PADDING_X * 2) / figure.points.length;
      const barWidth = Math.min(slot * 0.6, 64);

      const bars = figure.points
        .map((point, index) => {
          const xPos = PADDING_X + index * slot + (slot - barWidth) / 2;
          const yPos = y(point.value);
          const barHeight = HEIGHT - PADDING_Y - yPos;
          const center = PADDING_X + index * slot + slot / 2;
          return `<rect x="${xPos.toFixed(2)}" y="${yPos.toFixed(2)}" width="${barWidth.toFixed(2)}" height="${Math.max(barHeight, 0).toFixed(2)}" rx="6" fill="${point.color || '#2563c9'}" />`
            + `<text class="chart-label" x="${center}" y="${HEIGHT - PADDING_Y + 18}" text-anchor="middle">${point.label}</text>`
            + `<text class="chart-label" x="${center}" y="${yPos - 6}" text-anchor="middle">${formatValue(point.value)}</text>`;
        })
        .join('');

      barChartEl.innerHTML += bars;
    };

    const postJson = async (url, body) => {
      const res = await fetch(url, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(body)
      });
      if (!res.ok) {
        const message = await res.text();
        throw new Error(message || 'Request failed');
      }
      return res.json();
    };

    const updateLineChart = async () => {
      const figure = await postJson('/api/charts/line', { stations: selectedValues(stationSelect) });
      renderLineChart(figure);
    };

    const updateBarChart = async () => {
      const figure = await postJson('/api/charts/bar', { months: selectedValues(monthSelect) });
      renderBarChart(figure);
    };

    const loadFilters = async () => {
      const res = await fetch('/api/filters');
      if (!res.ok) {
        throw new Error('Unable to load filters');
      }
      const filters = await res.json();
      fillOptions(stationSelect, filters.stations, filters.default_station);
      fillOptions(monthSelect, filters.months, filters.default_month);
    };

    stationSelect.addEventListener('change', () => {
      updateLineChart().catch((err) => setStatus(err.message, 'error'));
    });

    monthSelect.addEventListener('change', () => {
      updateBarChart().catch((err) => setStatus(err.message, 'error'));
    });

    loadFilters()
      .then(() => Promise.all([updateLineChart(), updateBarChart()]))
      .catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
