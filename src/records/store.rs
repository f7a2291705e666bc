use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use super::seed::{seed_results, seed_students};
use crate::errors::{RecordsError, Result};
use crate::models::results::entities::SemesterResult;
use crate::models::students::entities::{Student, StudentFullProfile};
use crate::storage::{Collection, RecordBackend};

/// 学生与成绩记录库
pub struct RecordStore {
    backend: Arc<dyn RecordBackend>,
    // 读-改-写 需要串行，否则并发导入会互相覆盖
    write_lock: Mutex<()>,
}

impl RecordStore {
    pub fn new(backend: Arc<dyn RecordBackend>) -> Self {
        Self {
            backend,
            write_lock: Mutex::new(()),
        }
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// 集合不存在时写入示例数据，已有数据（包括损坏的数据）不会被覆盖
    pub async fn initialize(&self) -> Result<()> {
        let _guard = self.write_lock.lock().await;

        if self.is_absent(Collection::Students).await {
            info!("No student collection found, writing seed students");
            self.save(Collection::Students, &seed_students(), &[]).await?;
        }
        if self.is_absent(Collection::Results).await {
            info!("No result collection found, writing seed results");
            self.save(Collection::Results, &seed_results(), &[]).await?;
        }
        Ok(())
    }

    /// 全部学生，按写入顺序
    pub async fn list_students(&self) -> Vec<Student> {
        self.load(Collection::Students).await
    }

    /// 全部成绩，按写入顺序
    pub async fn list_results(&self) -> Vec<SemesterResult> {
        self.load(Collection::Results).await
    }

    /// 按学号插入或整体替换学生
    pub async fn upsert_student(&self, student: Student) -> Result<()> {
        self.upsert_students(vec![student]).await.map(|_| ())
    }

    /// 批量插入或替换学生，只写一次存储；同一批次里后出现的记录覆盖先出现的
    pub async fn upsert_students(&self, batch: Vec<Student>) -> Result<usize> {
        let _guard = self.write_lock.lock().await;

        let Snapshot {
            items: mut students,
            mut unreadable,
        } = self.load_for_write(Collection::Students).await?;
        let count = batch.len();
        // 新记录与坏记录同学号时，坏记录被替换
        unreadable.retain(|raw| {
            let reg_no = raw.get("regNo").and_then(Value::as_str);
            !batch.iter().any(|s| reg_no == Some(s.reg_no.as_str()))
        });
        for student in batch {
            upsert_by(&mut students, student, |a, b| a.reg_no == b.reg_no);
        }
        self.save(Collection::Students, &students, &unreadable).await?;

        debug!("Upserted {} student(s), collection size {}", count, students.len());
        Ok(count)
    }

    /// 按 (学号, 学期) 插入或整体替换成绩
    pub async fn upsert_result(&self, result: SemesterResult) -> Result<()> {
        self.upsert_results(vec![result]).await.map(|_| ())
    }

    /// 批量插入或替换成绩，只写一次存储
    pub async fn upsert_results(&self, batch: Vec<SemesterResult>) -> Result<usize> {
        let _guard = self.write_lock.lock().await;

        let Snapshot {
            items: mut results,
            mut unreadable,
        } = self.load_for_write(Collection::Results).await?;
        let count = batch.len();
        unreadable.retain(|raw| {
            let student_id = raw.get("studentId").and_then(Value::as_str);
            let semester = raw.get("semester").and_then(Value::as_u64);
            !batch.iter().any(|r| {
                student_id == Some(r.student_id.as_str())
                    && semester == Some(u64::from(r.semester.number()))
            })
        });
        for result in batch {
            upsert_by(&mut results, result, |a, b| {
                a.student_id == b.student_id && a.semester == b.semester
            });
        }
        self.save(Collection::Results, &results, &unreadable).await?;

        debug!("Upserted {} result(s), collection size {}", count, results.len());
        Ok(count)
    }

    /// 通过学号查找学生
    pub async fn find_student(&self, reg_no: &str) -> Option<Student> {
        self.list_students()
            .await
            .into_iter()
            .find(|s| s.reg_no == reg_no)
    }

    /// 学生的全部成绩
    pub async fn results_for(&self, reg_no: &str) -> Vec<SemesterResult> {
        self.list_results()
            .await
            .into_iter()
            .filter(|r| r.student_id == reg_no)
            .collect()
    }

    /// 学生完整档案
    pub async fn full_profile(&self, reg_no: &str) -> Option<StudentFullProfile> {
        let student = self.find_student(reg_no).await?;
        let results = self.results_for(reg_no).await;
        Some(StudentFullProfile::new(student, results))
    }

    async fn is_absent(&self, collection: Collection) -> bool {
        match self.backend.get(collection).await {
            Ok(blob) => blob.is_none(),
            Err(e) => {
                // 读不到时不确定是否有数据，不写入示例数据
                warn!("Failed to check collection {}: {}", collection, e);
                false
            }
        }
    }

    /// 读路径：读失败或整个集合损坏时视为空，单条坏记录跳过
    async fn load<T: DeserializeOwned>(&self, collection: Collection) -> Vec<T> {
        let blob = match self.backend.get(collection).await {
            Ok(Some(blob)) => blob,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("Failed to read collection {}, treating as empty: {}", collection, e);
                return Vec::new();
            }
        };

        match decode(collection, &blob) {
            Ok(snapshot) => snapshot.items,
            Err(e) => {
                warn!("Corrupt collection {}, treating as empty: {}", collection, e);
                Vec::new()
            }
        }
    }

    /// 写路径：读不到或整个集合无法解析时返回错误，不覆盖已有数据
    async fn load_for_write<T: DeserializeOwned>(
        &self,
        collection: Collection,
    ) -> Result<Snapshot<T>> {
        let Some(blob) = self.backend.get(collection).await? else {
            return Ok(Snapshot {
                items: Vec::new(),
                unreadable: Vec::new(),
            });
        };

        decode(collection, &blob).map_err(|e| {
            RecordsError::serialization(format!(
                "Collection {collection} is not a readable record list, refusing to overwrite it: {e}"
            ))
        })
    }

    /// 坏记录原样写回，排在可解析记录之后
    async fn save<T: Serialize>(
        &self,
        collection: Collection,
        items: &[T],
        unreadable: &[Value],
    ) -> Result<()> {
        let mut values = items
            .iter()
            .map(serde_json::to_value)
            .collect::<serde_json::Result<Vec<Value>>>()?;
        values.extend_from_slice(unreadable);
        let blob = serde_json::to_string(&values)?;
        self.backend.put(collection, blob).await
    }
}

/// 一个集合的内容：可解析的记录，以及无法解析的原始记录
struct Snapshot<T> {
    items: Vec<T>,
    unreadable: Vec<Value>,
}

/// 集合必须是 JSON 数组；数组里的每条记录单独解析
fn decode<T: DeserializeOwned>(
    collection: Collection,
    blob: &str,
) -> serde_json::Result<Snapshot<T>> {
    let raw: Vec<Value> = serde_json::from_str(blob)?;
    let mut items = Vec::with_capacity(raw.len());
    let mut unreadable = Vec::new();
    for value in raw {
        match T::deserialize(&value) {
            Ok(item) => items.push(item),
            Err(e) => {
                warn!("Skipping unreadable record in {}: {}", collection, e);
                unreadable.push(value);
            }
        }
    }
    Ok(Snapshot { items, unreadable })
}

/// 找到匹配项则原位替换，否则追加到末尾
fn upsert_by<T>(items: &mut Vec<T>, item: T, same: impl Fn(&T, &T) -> bool) {
    match items.iter().position(|existing| same(existing, &item)) {
        Some(index) => items[index] = item,
        None => items.push(item),
    }
}
