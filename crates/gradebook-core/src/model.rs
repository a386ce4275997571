//! Core data model types for gradebook.
//!
//! Students and courses reference each other, so both live in a [`Catalog`]
//! arena and point at each other through [`StudentId`] / [`CourseId`] handles.
//! Everything is kept in insertion order: the order in which the data file
//! first mentions a student, a course, or an enrollment.

use std::collections::HashMap;

use serde::Serialize;

/// Maximum number of scored tasks on one exam.
pub const NUMBER_OF_TASKS_ON_EXAM: usize = 5;

/// Maximum score on a single exam task.
pub const MAX_SCORE_ON_EXAM_TASK: u32 = 100;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct StudentId(pub usize);

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct CourseId(pub usize);

/// A student and their score list for every course they sat.
#[derive(Clone, Debug)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    marks: Vec<(CourseId, Vec<u32>)>,
}

impl Student {
    fn new(id: StudentId, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            marks: Vec::new(),
        }
    }

    /// Attach `scores` for `course`, replacing any earlier list for it.
    fn set_marks(&mut self, course: CourseId, scores: Vec<u32>) {
        match self.marks.iter_mut().find(|(c, _)| *c == course) {
            Some((_, existing)) => *existing = scores,
            None => self.marks.push((course, scores)),
        }
    }

    pub fn marks_in(&self, course: CourseId) -> Option<&[u32]> {
        self.marks
            .iter()
            .find(|(c, _)| *c == course)
            .map(|(_, s)| s.as_slice())
    }

    /// Courses this student is enrolled in, in enrollment order.
    pub fn courses(&self) -> impl Iterator<Item = CourseId> + '_ {
        self.marks.iter().map(|(c, _)| *c)
    }
}

/// A course and the students enrolled in it.
#[derive(Clone, Debug)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    students: Vec<StudentId>,
    by_name: HashMap<String, StudentId>,
}

impl Course {
    fn new(id: CourseId, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            students: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    /// Returns `false` if the student was already enrolled.
    fn enroll_student(&mut self, student: &Student) -> bool {
        if self.by_name.contains_key(&student.name) {
            return false;
        }
        self.by_name.insert(student.name.clone(), student.id);
        self.students.push(student.id);
        true
    }

    pub fn student_named(&self, name: &str) -> Option<StudentId> {
        self.by_name.get(name).copied()
    }

    /// Enrolled students in enrollment order.
    pub fn students(&self) -> &[StudentId] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

/// Outcome of [`Catalog::enroll`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Enrollment {
    /// The student joined the course.
    New,
    /// The student was already enrolled; only the scores were replaced.
    Existing,
}

/// All students and courses of one data session.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    students: Vec<Student>,
    student_index: HashMap<String, StudentId>,
    courses: Vec<Course>,
    course_index: HashMap<String, CourseId>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn student_or_insert(&mut self, name: &str) -> StudentId {
        if let Some(&id) = self.student_index.get(name) {
            return id;
        }
        let id = StudentId(self.students.len());
        self.students.push(Student::new(id, name));
        self.student_index.insert(name.to_string(), id);
        id
    }

    pub fn course_or_insert(&mut self, name: &str) -> CourseId {
        if let Some(&id) = self.course_index.get(name) {
            return id;
        }
        let id = CourseId(self.courses.len());
        self.courses.push(Course::new(id, name));
        self.course_index.insert(name.to_string(), id);
        id
    }

    /// Enroll `student` in `course` with `scores`.
    ///
    /// The score list always replaces any previous one for the pair; the
    /// return value tells whether the enrollment itself was new.
    pub fn enroll(&mut self, student: StudentId, course: CourseId, scores: Vec<u32>) -> Enrollment {
        self.students[student.0].set_marks(course, scores);
        if self.courses[course.0].enroll_student(&self.students[student.0]) {
            Enrollment::New
        } else {
            Enrollment::Existing
        }
    }

    pub fn student(&self, id: StudentId) -> &Student {
        &self.students[id.0]
    }

    pub fn course(&self, id: CourseId) -> &Course {
        &self.courses[id.0]
    }

    pub fn student_by_name(&self, name: &str) -> Option<&Student> {
        self.student_index.get(name).map(|&id| self.student(id))
    }

    pub fn course_by_name(&self, name: &str) -> Option<&Course> {
        self.course_index.get(name).map(|&id| self.course(id))
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Scores of `student` in `course`, both by name.
    pub fn marks(&self, course: &str, student: &str) -> Option<&[u32]> {
        let course = self.course_by_name(course)?;
        let student = course.student_named(student)?;
        self.student(student).marks_in(course.id)
    }

    /// The course's students and their scores in enrollment order.
    pub fn roster(&self, course: CourseId) -> Vec<StudentMarks<'_>> {
        self.course(course)
            .students()
            .iter()
            .filter_map(|&s| {
                let student = self.student(s);
                student.marks_in(course).map(|scores| StudentMarks {
                    name: &student.name,
                    scores,
                })
            })
            .collect()
    }
}

/// One student's scores in one course.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StudentMarks<'a> {
    pub name: &'a str,
    pub scores: &'a [u32],
}

/// All students of a course with their scores.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CourseRoster<'a> {
    pub course: &'a str,
    pub students: Vec<StudentMarks<'a>>,
}
