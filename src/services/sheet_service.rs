//! services/sheet_service.rs
//! Fuente tabular: lectura de la grilla completa y escritura de una celda.

use std::io::Write;
use std::ops::Range;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

const BOM: &[u8] = b"\xEF\xBB\xBF";

/// Grilla completa (cabecera + filas de datos) con escritura por celda.
/// Índices de fila y columna en base 0; la fila 0 es la cabecera.
pub trait TabularDataSource {
    fn read_grid(&self) -> Result<Vec<Vec<String>>>;
    fn write_cell(&mut self, row: usize, col: usize, value: &str) -> Result<()>;
}

/// Hoja respaldada por un archivo CSV.
///
/// Se guardan los bytes originales y el rango de cada registro: una escritura
/// solo re-codifica la fila modificada y el resto del archivo (comillas, fin de
/// línea, líneas en blanco, BOM) queda idéntico. Cada escritura reemplaza el
/// archivo de forma atómica y sincronizada antes de volver.
#[derive(Debug)]
pub struct CsvSheet {
    path: PathBuf,
    raw: Vec<u8>,
    spans: Vec<Range<usize>>, // bytes de cada registro, sin terminador
    rows: Vec<Vec<String>>,
}

impl CsvSheet {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let raw = std::fs::read(&path)
            .with_context(|| format!("No se pudo abrir la hoja {:?}", path))?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(raw.as_slice());

        let mut rows = Vec::new();
        let mut starts = Vec::new();
        for record in reader.records() {
            let record = record.with_context(|| format!("CSV inválido en {:?}", path))?;
            let start = record.position().map(|p| p.byte() as usize).unwrap_or(0);
            starts.push(start);
            rows.push(record.iter().map(str::to_string).collect::<Vec<_>>());
        }

        // BOM de Excel en la primera celda
        if let Some(first) = rows.first_mut().and_then(|r| r.first_mut()) {
            if let Some(stripped) = first.strip_prefix('\u{feff}') {
                *first = stripped.to_string();
            }
        }

        let spans = record_spans(&raw, &starts);
        log::info!("(open) Hoja {:?} cargada: {} filas", path, rows.len());
        Ok(Self {
            path,
            raw,
            spans,
            rows,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reemplaza los bytes del registro `row` por su versión re-codificada.
    fn splice_row(&mut self, row: usize) -> Result<()> {
        let span = self.spans[row].clone();

        let mut encoded = Vec::new();
        if self.raw[span.clone()].starts_with(BOM) {
            encoded.extend_from_slice(BOM);
        }
        {
            let mut writer = csv::WriterBuilder::new()
                .flexible(true)
                .terminator(csv::Terminator::Any(b'\n'))
                .from_writer(&mut encoded);
            writer.write_record(&self.rows[row])?;
            writer.flush()?;
        }
        if encoded.last() == Some(&b'\n') {
            encoded.pop();
        }

        let new_len = encoded.len();
        self.raw.splice(span.clone(), encoded);

        let new_end = span.start + new_len;
        let shift = new_end as isize - span.end as isize;
        self.spans[row] = span.start..new_end;
        for later in &mut self.spans[row + 1..] {
            later.start = (later.start as isize + shift) as usize;
            later.end = (later.end as isize + shift) as usize;
        }
        Ok(())
    }

    fn persist(&self) -> Result<()> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let permissions = std::fs::metadata(&self.path)
            .with_context(|| format!("No se pudo leer metadata de {:?}", self.path))?
            .permissions();

        let mut tmp = NamedTempFile::new_in(&dir)
            .with_context(|| format!("No se pudo crear archivo temporal en {:?}", dir))?;
        tmp.write_all(&self.raw)?;
        tmp.as_file().set_permissions(permissions)?;
        tmp.as_file().sync_all()?;

        tmp.persist(&self.path)
            .with_context(|| format!("No se pudo reemplazar {:?}", self.path))?;
        Ok(())
    }
}

/// Rango de bytes de cada registro a partir de su posición inicial. Entre dos
/// registros solo puede haber terminadores y líneas en blanco, que se excluyen.
fn record_spans(raw: &[u8], starts: &[usize]) -> Vec<Range<usize>> {
    let is_eol = |b: &u8| *b == b'\r' || *b == b'\n';
    starts
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = starts.get(i + 1).copied().unwrap_or(raw.len());
            let segment = &raw[start..end];
            let lead = segment.iter().take_while(|b| is_eol(b)).count();
            let trail = segment[lead..].iter().rev().take_while(|b| is_eol(b)).count();
            start + lead..end - trail
        })
        .collect()
}

impl TabularDataSource for CsvSheet {
    fn read_grid(&self) -> Result<Vec<Vec<String>>> {
        Ok(self.rows.clone())
    }

    fn write_cell(&mut self, row: usize, col: usize, value: &str) -> Result<()> {
        let cells = self
            .rows
            .get_mut(row)
            .with_context(|| format!("Fila {} fuera de rango", row))?;
        if cells.len() <= col {
            cells.resize(col + 1, String::new());
        }
        cells[col] = value.to_string();
        self.splice_row(row)?;
        self.persist()
    }
}
