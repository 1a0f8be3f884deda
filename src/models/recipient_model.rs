/// Campos lógicos que la hoja debe exponer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    BookingUrl,
    Recruiter,
    StudioName,
    AttachmentId,
    Status,
}

/// Índices (base 0) de cada campo lógico en la grilla actual.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnBinding {
    pub name: usize,
    pub email: usize,
    pub booking_url: usize,
    pub recruiter: usize,
    pub studio_name: usize,
    pub attachment_id: usize,
    pub status: usize,
}

impl ColumnBinding {
    pub fn index(&self, field: Field) -> usize {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::BookingUrl => self.booking_url,
            Field::Recruiter => self.recruiter,
            Field::StudioName => self.studio_name,
            Field::AttachmentId => self.attachment_id,
            Field::Status => self.status,
        }
    }

    /// Valor de la celda del campo en la fila; una fila corta se lee como vacía.
    pub fn cell<'a>(&self, row: &'a [String], field: Field) -> &'a str {
        row.get(self.index(field)).map(String::as_str).unwrap_or("")
    }
}

/// Vista lógica de una fila de candidato. Se arma por fila y se descarta
/// después del intento de envío.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipientRecord {
    pub name: String,
    pub email: String,
    pub booking_url: String,
    pub recruiter: String,
    pub studio_name: String,
    pub attachment_id: String,
}

impl RecipientRecord {
    pub fn from_row(row: &[String], columns: &ColumnBinding) -> Self {
        let cell = |field| columns.cell(row, field).to_string();
        Self {
            name: cell(Field::Name),
            email: cell(Field::Email),
            booking_url: cell(Field::BookingUrl),
            recruiter: cell(Field::Recruiter),
            studio_name: cell(Field::StudioName),
            attachment_id: cell(Field::AttachmentId),
        }
    }

    /// Nombre y email son los únicos datos sin los cuales la fila no es accionable.
    pub fn has_required_fields(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty()
    }
}
