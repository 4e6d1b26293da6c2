//! The dashboard page. Served as-is; all data arrives via `/api/dashboard`.

pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Cafe Marketing Dashboard</title>
  <style>
    :root {
      --bg-1: #faf4e8;
      --bg-2: #f2d9b4;
      --ink: #2d2a26;
      --accent: #c07b2e;
      --accent-2: #35524a;
      --spend: #ffca28;
      --reach: #66bb6a;
      --impressions: #42a5f5;
      --interested: #ef5350;
      --card: rgba(255, 255, 255, 0.88);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 55%),
        linear-gradient(140deg, var(--bg-1), #fdeedd 65%, #f8f1e7 100%);
      color: var(--ink);
      font-family: "Trebuchet MS", "Segoe UI", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(980px, 100%);
      background: var(--card);
      border-radius: 24px;
      box-shadow: 0 22px 54px rgba(53, 82, 74, 0.16);
      padding: 34px;
      display: grid;
      gap: 26px;
    }

    header h1 {
      margin: 0;
      font-size: clamp(1.8rem, 4vw, 2.5rem);
    }

    header .subtitle {
      margin: 4px 0 0;
      color: #6b645a;
    }

    .campaign-line {
      margin: 10px 0 0;
      font-size: 1.05rem;
    }

    .campaign-line .chip {
      display: inline-block;
      margin-left: 8px;
      padding: 2px 10px;
      border-radius: 999px;
      font-size: 0.8rem;
      background: rgba(53, 82, 74, 0.12);
      color: var(--accent-2);
    }

    .tiles {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(190px, 1fr));
      gap: 16px;
    }

    .tile {
      background: white;
      border-radius: 16px;
      padding: 18px;
      border: 1px solid rgba(53, 82, 74, 0.1);
    }

    .tile .label {
      display: block;
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: #8d8679;
    }

    .tile .value {
      display: block;
      margin-top: 8px;
      font-size: 1.6rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .tile .hint {
      display: block;
      margin-top: 6px;
      font-size: 0.8rem;
      color: #9a9284;
    }

    .tabs {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: rgba(53, 82, 74, 0.08);
      border-radius: 999px;
      width: fit-content;
    }

    .tab {
      appearance: none;
      border: none;
      background: transparent;
      border-radius: 999px;
      padding: 8px 16px;
      font-size: 0.9rem;
      font-weight: 600;
      color: #6b645a;
      cursor: pointer;
    }

    .tab.active {
      background: white;
      color: var(--accent-2);
      box-shadow: 0 6px 14px rgba(53, 82, 74, 0.14);
    }

    .chart-grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
      gap: 16px;
    }

    .chart-card {
      background: white;
      border-radius: 18px;
      padding: 16px;
      border: 1px solid rgba(53, 82, 74, 0.1);
    }

    .chart-card h3 {
      margin: 0 0 4px;
      font-size: 1.05rem;
    }

    .legend {
      display: flex;
      flex-wrap: wrap;
      gap: 12px;
      margin: 6px 0 4px;
      font-size: 0.82rem;
      color: #6b645a;
    }

    .legend .swatch {
      display: inline-block;
      width: 10px;
      height: 10px;
      border-radius: 3px;
      margin-right: 5px;
    }

    svg.chart {
      width: 100%;
      height: 240px;
      display: block;
    }

    .axis-line {
      stroke: rgba(53, 82, 74, 0.14);
    }

    .axis-label {
      fill: #837c6f;
      font-size: 11px;
    }

    .status {
      font-size: 0.95rem;
      color: #6b645a;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #b33a2b;
    }

    .hidden {
      display: none;
    }

    @media (max-width: 640px) {
      .app {
        padding: 26px 20px;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>&#9749; Cafe Marketing Dashboard</h1>
      <p class="subtitle">Campaign Performance Overview</p>
      <p class="campaign-line hidden" id="campaign-line">
        <strong id="campaign-name"></strong>
        <span id="account-name"></span>
        <span class="chip" id="campaign-status"></span>
        <span class="chip" id="campaign-objective"></span>
      </p>
    </header>

    <div class="status" id="status">Loading data&hellip;</div>

    <section class="tiles hidden" id="tiles">
      <div class="tile">
        <span class="label">Total Spent</span>
        <span class="value" id="tile-spend">&#8377;0.00</span>
      </div>
      <div class="tile">
        <span class="label">People Reached</span>
        <span class="value" id="tile-reach">0</span>
        <span class="hint">Unique number of people who saw your ad.</span>
      </div>
      <div class="tile">
        <span class="label">Total Views (Impressions)</span>
        <span class="value" id="tile-impressions">0</span>
        <span class="hint">Total number of times your ad was seen.</span>
      </div>
      <div class="tile">
        <span class="label">Interested Audience</span>
        <span class="value" id="tile-views">0</span>
        <span class="hint">Landing Page Views (Conversion Estimate)</span>
      </div>
    </section>

    <section class="hidden" id="charts">
      <div class="tabs" role="tablist">
        <button class="tab active" type="button" data-tab="daily" role="tab">Daily Activity</button>
        <button class="tab" type="button" data-tab="growth" role="tab">Cumulative Growth</button>
      </div>

      <div class="chart-grid" id="daily-panel">
        <div class="chart-card">
          <h3>Daily Reach &amp; Impressions</h3>
          <div class="legend" id="daily-legend"></div>
          <svg class="chart" id="daily-lines" viewBox="0 0 600 240" role="img"></svg>
        </div>
        <div class="chart-card">
          <h3>Daily Spend (&#8377;)</h3>
          <svg class="chart" id="daily-bars" viewBox="0 0 600 240" role="img"></svg>
        </div>
      </div>

      <div class="chart-grid hidden" id="growth-panel">
        <div class="chart-card">
          <h3>Total Growth Over Time</h3>
          <div class="legend" id="growth-legend"></div>
          <svg class="chart" id="growth-lines" viewBox="0 0 600 240" role="img"></svg>
        </div>
      </div>
    </section>
  </main>

  <script>
    const statusEl = document.getElementById('status');
    const tilesEl = document.getElementById('tiles');
    const chartsEl = document.getElementById('charts');
    const tabs = Array.from(document.querySelectorAll('.tab'));

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const inr = (value) =>
      '₹' + value.toLocaleString('en-IN', { minimumFractionDigits: 2, maximumFractionDigits: 2 });

    const count = (value) => value.toLocaleString('en-IN');

    const clearSvg = (svg) => {
      while (svg.firstChild) {
        svg.removeChild(svg.firstChild);
      }
    };

    const svgEl = (name, attrs) => {
      const el = document.createElementNS('http://www.w3.org/2000/svg', name);
      Object.entries(attrs).forEach(([key, value]) => el.setAttribute(key, value));
      return el;
    };

    const chartFrame = (svg, minValue, maxValue) => {
      const width = 600;
      const height = 240;
      const padX = 46;
      const padY = 30;
      const top = 16;

      let min = Math.min(minValue, 0);
      let max = Math.max(maxValue, 0);
      if (min === max) {
        max += 1;
      }
      const range = max - min;
      const y = (value) => height - padY - ((value - min) * (height - top - padY)) / range;

      for (let i = 0; i <= 4; i += 1) {
        const value = min + (range * i) / 4;
        const yPos = y(value);
        svg.appendChild(svgEl('line', {
          class: 'axis-line', x1: padX, y1: yPos, x2: width - padX, y2: yPos
        }));
        const label = svgEl('text', {
          class: 'axis-label', x: padX - 8, y: yPos + 4, 'text-anchor': 'end'
        });
        label.textContent = Math.round(value * 10) / 10;
        svg.appendChild(label);
      }

      return { width, height, padX, padY, y };
    };

    const xLabels = (svg, frame, labels, x) => {
      const every = labels.length > 8 ? Math.ceil(labels.length / 8) : 1;
      labels.forEach((text, index) => {
        if (index % every !== 0) {
          return;
        }
        const label = svgEl('text', {
          class: 'axis-label',
          x: x(index),
          y: frame.height - frame.padY + 16,
          'text-anchor': 'middle'
        });
        label.textContent = text.slice(5);
        svg.appendChild(label);
      });
    };

    const renderLines = (svg, labels, series) => {
      clearSvg(svg);
      if (!labels.length) {
        return;
      }
      const all = series.flatMap((s) => s.values);
      const frame = chartFrame(svg, Math.min(...all), Math.max(...all));
      const step = labels.length > 1 ? (frame.width - frame.padX * 2) / (labels.length - 1) : 0;
      const x = (index) => frame.padX + index * step;

      series.forEach((s) => {
        const path = s.values
          .map((value, index) => `${index === 0 ? 'M' : 'L'} ${x(index).toFixed(2)} ${frame.y(value).toFixed(2)}`)
          .join(' ');
        svg.appendChild(svgEl('path', {
          d: path, fill: 'none', stroke: s.color, 'stroke-width': 2.5
        }));
        s.values.forEach((value, index) => {
          svg.appendChild(svgEl('circle', {
            cx: x(index), cy: frame.y(value), r: 3, fill: 'white', stroke: s.color, 'stroke-width': 2
          }));
        });
      });

      xLabels(svg, frame, labels, x);
    };

    const renderBars = (svg, labels, values, color) => {
      clearSvg(svg);
      if (!labels.length) {
        return;
      }
      const frame = chartFrame(svg, 0, Math.max(...values));
      const slot = (frame.width - frame.padX * 2) / labels.length;
      const barWidth = Math.min(28, slot * 0.6);

      values.forEach((value, index) => {
        const xPos = frame.padX + slot * index + (slot - barWidth) / 2;
        const yPos = frame.y(value);
        svg.appendChild(svgEl('rect', {
          x: xPos, y: yPos, width: barWidth, height: Math.max(frame.y(0) - yPos, 0), fill: color, rx: 3
        }));
      });

      xLabels(svg, frame, labels, (index) => frame.padX + slot * index + slot / 2);
    };

    const renderLegend = (el, series) => {
      el.innerHTML = '';
      series.forEach((s) => {
        const item = document.createElement('span');
        const swatch = document.createElement('span');
        swatch.className = 'swatch';
        swatch.style.background = s.color;
        item.appendChild(swatch);
        item.appendChild(document.createTextNode(s.label));
        el.appendChild(item);
      });
    };

    const colors = {
      spend: getComputedStyle(document.documentElement).getPropertyValue('--spend').trim(),
      reach: getComputedStyle(document.documentElement).getPropertyValue('--reach').trim(),
      impressions: getComputedStyle(document.documentElement).getPropertyValue('--impressions').trim(),
      interested: getComputedStyle(document.documentElement).getPropertyValue('--interested').trim()
    };

    const renderCharts = (trend) => {
      const labels = trend.map((point) => point.date);

      const dailySeries = [
        { label: 'Reach', color: colors.reach, values: trend.map((p) => p.reach) },
        { label: 'Impressions', color: colors.impressions, values: trend.map((p) => p.impressions) }
      ];
      renderLegend(document.getElementById('daily-legend'), dailySeries);
      renderLines(document.getElementById('daily-lines'), labels, dailySeries);
      renderBars(document.getElementById('daily-bars'), labels, trend.map((p) => p.spend), colors.spend);

      const growthSeries = [
        { label: 'Cumulative Reach', color: colors.reach, values: trend.map((p) => p.cumulative_reach) },
        { label: 'Cumulative Impressions', color: colors.impressions, values: trend.map((p) => p.cumulative_impressions) },
        { label: 'Cumulative Interested Audience', color: colors.interested, values: trend.map((p) => p.cumulative_landing_page_views) }
      ];
      renderLegend(document.getElementById('growth-legend'), growthSeries);
      renderLines(document.getElementById('growth-lines'), labels, growthSeries);
    };

    const renderDashboard = (data) => {
      document.getElementById('campaign-name').textContent = data.campaign.name;
      document.getElementById('account-name').textContent = ' — ' + data.account.name;
      document.getElementById('campaign-status').textContent = data.campaign.status;
      const objectiveEl = document.getElementById('campaign-objective');
      if (data.campaign.objective) {
        objectiveEl.textContent = data.campaign.objective;
      } else {
        objectiveEl.classList.add('hidden');
      }
      document.getElementById('campaign-line').classList.remove('hidden');

      if (!data.summary) {
        setStatus('No data available for this campaign yet.');
        return;
      }

      document.getElementById('tile-spend').textContent = inr(data.summary.spend);
      document.getElementById('tile-reach').textContent = count(data.summary.reach);
      document.getElementById('tile-impressions').textContent = count(data.summary.impressions);
      document.getElementById('tile-views').textContent = count(data.summary.landing_page_views);
      tilesEl.classList.remove('hidden');

      if (!data.trend.length) {
        setStatus('No daily data yet.');
        return;
      }

      setStatus('');
      chartsEl.classList.remove('hidden');
      renderCharts(data.trend);
    };

    tabs.forEach((button) => {
      button.addEventListener('click', () => {
        tabs.forEach((tab) => tab.classList.toggle('active', tab === button));
        document.getElementById('daily-panel').classList.toggle('hidden', button.dataset.tab !== 'daily');
        document.getElementById('growth-panel').classList.toggle('hidden', button.dataset.tab !== 'growth');
      });
    });

    fetch('/api/dashboard')
      .then(async (res) => {
        if (!res.ok) {
          throw new Error(await res.text() || 'Unable to load dashboard data');
        }
        return res.json();
      })
      .then(renderDashboard)
      .catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
